//! Stock Uzbek name corpus.

pub(super) const GIRLS: &[&str] = &[
    "Aisha",
    "Anora",
    "Aziza",
    "Barno",
    "Dilnoza",
    "Durdona",
    "Farangiz",
    "Gulnora",
    "Kamola",
    "Laylo",
    "Malika",
    "Muslima",
    "Nilufar",
    "Nodira",
    "Oisha",
    "Oydin",
    "Shahnoza",
    "Shirin",
    "Zarina",
    "Zilola",
    "Zuhra",
    "Komila",
    "Muhabbat",
    "Nasiba",
    "Dilfuza",
    "Gulchehra",
    "Madina",
];

pub(super) const BOYS: &[&str] = &[
    "Abdulloh",
    "Amir",
    "Alisher",
    "Akmal",
    "Bekzod",
    "Davron",
    "Elyor",
    "Farrux",
    "Husan",
    "Islom",
    "Jahongir",
    "Kamol",
    "Kamoliddin",
    "Mansur",
    "Nodir",
    "Odil",
    "Ravshan",
    "Sardor",
    "Timur",
    "Umid",
    "Zafar",
];

// (name, meaning, origin)
pub(super) const MEANINGS: &[(&str, &str, &str)] = &[
    ("Aisha", "Hayotiy, tirik", "Arabcha"),
    ("Komila", "Mukammal, kamolotga yetgan", "Arabcha"),
    ("Kamola", "Kamolotga yetgan, to'liq", "Arabcha"),
    ("Oisha", "Hayot beruvchi, jonli", "Arabcha"),
    ("Anora", "Anor mevasi, go'zal", "Forscha"),
    ("Aziza", "Aziz, hurmatli", "Arabcha"),
    ("Dilnoza", "Dilni o'ziga tortuvchi", "Forscha"),
    ("Malika", "Malika, qirolicha", "Arabcha"),
    ("Muslima", "Musulmon ayol", "Arabcha"),
    ("Zuhra", "Tong yulduzi, yorug'lik", "Arabcha"),
    ("Madina", "Muqaddas shahar", "Arabcha"),
    ("Kamoliddin", "Dinining kamoli, mukammal", "Arabcha"),
    ("Kamol", "Kamolot, mukammallik", "Arabcha"),
    ("Amir", "Rahbar, amirlik qiluvchi", "Arabcha"),
    ("Islom", "Tinchlik, totuvlik", "Arabcha"),
    ("Jahongir", "Dunyoni egallagan", "Forscha"),
    ("Alisher", "Arslon sifatli", "Arabcha-Forscha"),
];
