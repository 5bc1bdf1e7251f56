//! Keyword taxonomy: the ordered category and subcategory keyword tables.
//!
//! Declaration order is significant. A description that contains keywords from
//! several categories is assigned to the one declared first, so reordering
//! entries here changes classification results.
//!
//! Keywords are lower-case; descriptions are lower-cased before matching.

/// Category label used when no keyword matches.
pub const UNKNOWN: &str = "unknown";

/// A label together with the keywords that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Subcategory rules registered under one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcategoryTable {
    pub category: &'static str,
    pub rules: &'static [Rule],
}

const fn rule(label: &'static str, keywords: &'static [&'static str]) -> Rule {
    Rule { label, keywords }
}

pub static CATEGORIES: &[Rule] = &[
    rule(
        "Food",
        &[
            "restaurant",
            "food",
            "swiggy",
            "zomato",
            "cafe",
            "dine",
            "food out",
            "water",
            "juice",
            "hotel",
            "milk",
            "neighbourhood v",
            "grocery",
            "snack",
            "breakfast",
            "lunch",
            "dinner",
            "tea",
            "coffee",
            "ice cream",
            "bakery",
            "dhaba",
            "thindi",
            "tiffin",
            "coconut",
            "veggie",
            "groceries",
        ],
    ),
    rule(
        "Transportation",
        &[
            "uber",
            "ola",
            "cab",
            "taxi",
            "auto",
            "petrol",
            "fuel",
            "railways",
            "irctc",
            "train",
            "fuels",
            "rail",
            "emission test",
            "number plate",
            "parking",
            "metro",
            "bus",
            "bmtc",
            "zoomcar",
            "car rental",
        ],
    ),
    rule(
        "Culture",
        &[
            "movie",
            "netflix",
            "prime",
            "hotstar",
            "subscription",
            "entertainment",
            "theatre",
            "concert",
            "show",
            "cinema",
            "shetty cinemas",
            "badminton",
            "sports",
            "gaming",
        ],
    ),
    rule(
        "Household",
        &[
            "bill",
            "electricity",
            "phone",
            "mobile",
            "recharge",
            "dth",
            "broadband",
            "internet",
            "wifi",
            "maintenance",
            "repair",
            "rent",
            "cleaning",
            "appliance",
            "furniture",
        ],
    ),
    rule(
        "Health",
        &[
            "medical",
            "hospital",
            "doctor",
            "pharmacy",
            "medicine",
            "health",
            "clinic",
            "consultation",
            "test",
            "optical",
            "lenskart",
            "specs",
            "apollo",
        ],
    ),
    rule(
        "Education",
        &[
            "course",
            "college",
            "school",
            "fees",
            "tuition",
            "education",
            "books",
            "stationery",
            "class",
            "study",
        ],
    ),
    rule(
        "Investment",
        &[
            "investment",
            "mutual fund",
            "stocks",
            "shares",
            "sip",
            "trading",
            "deposit",
            "zerodha",
        ],
    ),
    rule(
        "Apparel",
        &[
            "clothes",
            "clothing",
            "fashion",
            "dress",
            "shirt",
            "pants",
            "shoes",
            "wardrobe",
            "accessories",
        ],
    ),
    rule(
        "Beauty",
        &[
            "salon",
            "haircut",
            "spa",
            "cosmetics",
            "grooming",
            "beauty",
        ],
    ),
    rule(
        "Services",
        &[
            "broker",
            "agent",
            "service",
            "consultation",
            "professional",
            "fees",
        ],
    ),
    rule("Rent", &["rent", "house rent", "room rent", "deposit"]),
    rule(
        "Social Life",
        &[
            "party",
            "hangout",
            "friends",
            "club",
            "social",
            "gathering",
            "treat",
            "meet",
            "couple meet",
            "date",
        ],
    ),
    rule(
        "Shopping",
        &[
            "amazon",
            "flipkart",
            "online shopping",
            "retail",
            "mart",
            "store",
            "bazaar",
        ],
    ),
    rule(
        "Digital",
        &[
            "aws",
            "cloud",
            "subscription",
            "digital",
            "online service",
            "jio",
            "airtel",
            "phone bill",
        ],
    ),
    rule(
        "Donation",
        &["donation", "charity", "trust", "temple", "religious"],
    ),
    rule(
        "Interests",
        &[
            "int.pd",
            "interest",
            "int paid",
            "int. paid",
            "int credited",
            "interest credited",
        ],
    ),
    rule(
        "Gift",
        &[
            "gift",
            "present",
            "gifts",
            "birthday",
            "anniversary",
            "celebration",
            "rakhi",
            "festival",
        ],
    ),
];

pub static SUBCATEGORIES: &[SubcategoryTable] = &[
    SubcategoryTable {
        category: "Household",
        rules: &[
            rule("Maid", &["maid", "house help", "cleaning"]),
            rule(
                "Furniture",
                &[
                    "furniture",
                    "sofa",
                    "table",
                    "chair",
                    "bed",
                    "shelf",
                    "cabinet",
                ],
            ),
            rule(
                "Kitchen",
                &["kitchen", "utensil", "cooker", "mixer", "plates", "cups"],
            ),
            rule(
                "Phone Bill",
                &["phone", "mobile", "recharge", "postpaid", "prepaid"],
            ),
            rule(
                "Other Essentials",
                &["essential", "grocery", "daily", "toiletries"],
            ),
            rule(
                "Appliances",
                &[
                    "appliance",
                    "fridge",
                    "ac",
                    "microwave",
                    "washing machine",
                    "fan",
                    "cooler",
                ],
            ),
            rule(
                "Internet",
                &["internet", "broadband", "wifi", "data", "connection"],
            ),
            rule("DTH", &["dth", "set top", "cable", "television"]),
            rule("Mom hyd", &["mom hyd"]),
            rule("Ironing", &["iron", "press", "laundry"]),
            rule("Maintenance", &["maintenance", "repair", "fix", "service"]),
            rule("Cook", &["cook", "chef", "cooking"]),
            rule(
                "Toiletries",
                &[
                    "toiletries",
                    "soap",
                    "shampoo",
                    "toothpaste",
                    "personal care",
                ],
            ),
            rule("Painting", &["paint", "painting", "wall", "decor"]),
            rule(
                "Electricity",
                &["electricity", "power", "electric", "current"],
            ),
            rule(
                "Packers and movers",
                &["packers", "movers", "moving", "relocation", "shifting"],
            ),
            rule("Home Loan", &["home loan", "loan", "emi", "mortgage"]),
            rule("Rent", &["rent", "deposit", "advance", "lease"]),
        ],
    },
    SubcategoryTable {
        category: "Food",
        rules: &[
            rule(
                "Vegis/Groceries",
                &[
                    "grocery",
                    "vegetable",
                    "vegi",
                    "groceries",
                    "fruit",
                    "milk",
                    "water",
                    "provisions",
                    "mart",
                    "store",
                ],
            ),
            rule(
                "Eating out",
                &[
                    "restaurant",
                    "swiggy",
                    "zomato",
                    "cafe",
                    "dine",
                    "hotel",
                    "food out",
                    "eating out",
                    "takeaway",
                ],
            ),
            rule(
                "Beverages",
                &[
                    "beverage",
                    "juice",
                    "coffee",
                    "tea",
                    "drink",
                    "beverages",
                    "soda",
                    "soft drink",
                ],
            ),
            rule(
                "Snack",
                &["snack", "chips", "namkeen", "biscuit", "cookie", "bakery"],
            ),
            rule("Lunch", &["lunch", "afternoon meal", "tiffin"]),
            rule("Dinner", &["dinner", "night meal", "supper"]),
            rule("Breakfast", &["breakfast", "morning meal", "toast"]),
            rule(
                "Food Delivery",
                &["delivery", "online order", "swiggy", "zomato"],
            ),
            rule(
                "Street Food",
                &["street food", "chaat", "roadside", "vendor"],
            ),
        ],
    },
    SubcategoryTable {
        category: "Transportation",
        rules: &[
            rule("Taxi", &["uber", "ola", "taxi", "cab", "ride", "hire"]),
            rule(
                "Subway/Train",
                &["train", "subway", "metro", "rail", "irctc", "railway"],
            ),
            rule(
                "Bike",
                &["bike", "cycle", "bicycle", "fuel", "petrol", "diesel"],
            ),
            rule(
                "Parcel/Courier",
                &["parcel", "courier", "delivery", "shipping", "post"],
            ),
            rule("Car", &["car", "drive", "parking", "toll", "fastag"]),
            rule("Flight", &["flight", "air", "airport", "airline", "plane"]),
            rule("Bus", &["bus", "transport", "roadways"]),
            rule(
                "Vehicle Service",
                &[
                    "service",
                    "repair",
                    "maintenance",
                    "emission test",
                    "number plate",
                ],
            ),
            rule("Fine", &["fine", "penalty", "challan", "ticket"]),
        ],
    },
    SubcategoryTable {
        category: "Beauty",
        rules: &[
            rule("Beauty", &["beauty", "salon", "spa"]),
            rule("Cosmetics", &["cosmetic", "makeup", "lipstick"]),
            rule("Haircut", &["haircut", "hair"]),
            rule(
                "Accessories",
                &["accessory", "jewellery", "earring", "ring"],
            ),
        ],
    },
    SubcategoryTable {
        category: "Services",
        rules: &[
            rule("House broker", &["broker", "agent"]),
            rule("Taxation", &["taxation"]),
            rule("Passport", &["passport"]),
            rule("Cleaning", &["clean", "cleaning"]),
        ],
    },
    SubcategoryTable {
        category: "Investment",
        rules: &[
            rule("Trading", &["zerodha", "trading", "stocks", "shares"]),
            rule("Mutual Funds", &["mutual fund", "sip", "investment"]),
            rule("Fixed Deposits", &["fd", "fixed deposit", "deposit"]),
            rule("Other Investments", &["gold", "bonds", "crypto"]),
        ],
    },
    SubcategoryTable {
        category: "Digital",
        rules: &[
            rule("Cloud Services", &["aws", "cloud", "server", "hosting"]),
            rule(
                "Subscriptions",
                &["subscription", "netflix", "prime", "hotstar"],
            ),
            rule(
                "Mobile Services",
                &["jio", "airtel", "vodafone", "phone bill"],
            ),
            rule("Apps", &["app purchase", "playstore", "appstore"]),
        ],
    },
    SubcategoryTable {
        category: "Rent",
        rules: &[
            rule("House Rent", &["house rent", "home rent", "flat rent"]),
            rule("Deposit", &["deposit", "advance", "security"]),
            rule("Maintenance", &["maintenance", "society", "association"]),
            rule("Utilities", &["utility", "electricity", "water", "gas"]),
        ],
    },
    SubcategoryTable {
        category: "Culture",
        rules: &[
            rule("Music", &["music", "spotify", "itunes"]),
            rule("Sports", &["sport", "cricket", "football", "badminton"]),
            rule("Apps", &["app", "application", "software"]),
            rule("Gaming", &["game", "gaming"]),
            rule(
                "OTT",
                &["netflix", "prime", "hotstar", "ott", "subscription"],
            ),
            rule("Books", &["book", "novel"]),
            rule("Movie", &["movie", "cinema"]),
            rule("Dance/Club", &["dance", "club"]),
            rule("Gym", &["gym", "fitness"]),
            rule("Yoga", &["yoga"]),
            rule("Crafting", &["craft", "crafting"]),
        ],
    },
    SubcategoryTable {
        category: "Health",
        rules: &[
            rule("Insurance", &["insurance"]),
            rule("Medicine", &["medicine", "pharmacy", "tablet", "medic"]),
            rule("Health Tests", &["test", "diagnostic", "lab", "scan"]),
            rule("Hospital", &["hospital", "clinic"]),
            rule("Health", &["health", "doctor", "checkup"]),
            rule("Baby Food", &["baby food", "infant"]),
            rule("Specs", &["specs", "spectacles", "glasses"]),
        ],
    },
    SubcategoryTable {
        category: "Social Life",
        rules: &[
            rule("Hangout", &["hangout", "meet"]),
            rule("Party", &["party"]),
            rule("Fun", &["fun", "outing"]),
            rule("Friend", &["friend"]),
        ],
    },
    SubcategoryTable {
        category: "Trip",
        rules: &[
            rule("Food", &["food", "meal", "lunch", "dinner"]),
            rule("Misc", &["misc", "other"]),
            rule(
                "Transportation",
                &["taxi", "train", "flight", "bus", "car", "transport"],
            ),
            rule("Stay/Hotel", &["stay", "hotel"]),
            rule("Tickets", &["ticket", "tickets"]),
        ],
    },
    SubcategoryTable {
        category: "Apparel",
        rules: &[
            rule(
                "Clothing",
                &[
                    "clothes", "clothing", "shirt", "pant", "dress", "kurta", "jeans", "tshirt",
                    "saree",
                ],
            ),
            rule("Shoes", &["shoe", "shoes", "sandal"]),
            rule("Specs", &["specs", "spectacles", "glasses"]),
            rule("Fashion", &["fashion", "style"]),
            rule("Laundry", &["laundry", "wash"]),
            rule("Watch", &["watch"]),
        ],
    },
    SubcategoryTable {
        category: "Tax",
        rules: &[
            rule("PT", &["pt"]),
            rule("TDS", &["tds"]),
            rule("Tax", &["tax"]),
        ],
    },
    SubcategoryTable {
        category: "Event",
        rules: &[
            rule("Stay", &["stay", "hotel"]),
            rule("Food", &["food", "meal"]),
            rule("Decorations", &["decor", "decoration"]),
        ],
    },
    SubcategoryTable {
        category: "Education",
        rules: &[rule("Schooling", &["school", "schooling"])],
    },
    SubcategoryTable {
        category: "Marriage",
        rules: &[
            rule("transport", &["transport", "taxi", "car", "bus"]),
            rule("footwear", &["footwear", "shoe", "sandal"]),
            rule("clothes", &["clothes", "clothing", "dress"]),
            rule("gifts", &["gift", "present"]),
            rule("photographer", &["photo", "photographer"]),
            rule("food", &["food", "meal"]),
            rule("stay", &["stay", "hotel"]),
            rule("publicity", &["publicity"]),
            rule("beauty", &["beauty", "salon"]),
            rule("invitation cards", &["invitation", "card"]),
        ],
    },
];

/// Subcategory rules for a category; `None` when the category has no table.
pub fn subcategory_rules(category: &str) -> Option<&'static [Rule]> {
    SUBCATEGORIES
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.rules)
}
