use super::catalog_model::CatalogEntry;

/// The static exercise catalog: 9 exercises with monthly thresholds per tier.
/// Compiled in, never fetched at runtime.
pub static EXERCISE_CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        exercise: "Liegestütz",
        unit: "Anzahl",
        s: 300.0,
        m: 600.0,
        l: 1200.0,
        xl: 1800.0,
    },
    CatalogEntry {
        exercise: "Klimmzüge",
        unit: "Anzahl",
        s: 50.0,
        m: 100.0,
        l: 200.0,
        xl: 300.0,
    },
    CatalogEntry {
        exercise: "Kniebeugen",
        unit: "Anzahl",
        s: 300.0,
        m: 600.0,
        l: 1200.0,
        xl: 1800.0,
    },
    CatalogEntry {
        exercise: "Joggen",
        unit: "km",
        s: 20.0,
        m: 40.0,
        l: 60.0,
        xl: 80.0,
    },
    CatalogEntry {
        exercise: "Wandern",
        unit: "hm",
        s: 500.0,
        m: 1000.0,
        l: 2000.0,
        xl: 3000.0,
    },
    CatalogEntry {
        exercise: "Plank",
        unit: "min",
        s: 15.0,
        m: 30.0,
        l: 60.0,
        xl: 90.0,
    },
    CatalogEntry {
        exercise: "Sit-ups",
        unit: "Anzahl",
        s: 300.0,
        m: 600.0,
        l: 1200.0,
        xl: 1800.0,
    },
    CatalogEntry {
        exercise: "Radfahren",
        unit: "km",
        s: 50.0,
        m: 100.0,
        l: 200.0,
        xl: 300.0,
    },
    CatalogEntry {
        exercise: "Workout (HIIT)",
        unit: "min",
        s: 60.0,
        m: 90.0,
        l: 120.0,
        xl: 180.0,
    },
];
