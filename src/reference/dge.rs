//! DGE reference values
//!
//! Daily recommended intakes and tolerable upper intake levels per nutrient,
//! for adult men, adult women and six child age brackets, plus the
//! pregnancy/breastfeeding values for the nutrients that have them.
//!
//! Amounts are in the nutrient's canonical unit (see `NutrientType::unit`).
//! Child columns are ordered 1-3, 4-6, 7-9, 10-12, 13-14, 15-18 years.

use crate::models::NutrientType;

use super::table::{NutrientReference, ReferenceValue, SpecialReference};

/// Value with a tolerable upper intake level
const fn ul(recommended: f64, upper_limit: f64) -> ReferenceValue {
    ReferenceValue {
        recommended,
        upper_limit: Some(upper_limit),
    }
}

/// Value with no established upper intake level
const fn rda(recommended: f64) -> ReferenceValue {
    ReferenceValue {
        recommended,
        upper_limit: None,
    }
}

pub(super) const DGE_ROWS: [NutrientReference; 23] = [
    // ---------------------------------------------------------------- vitamins
    NutrientReference {
        nutrient: NutrientType::VitaminA,
        male: ul(850.0, 3000.0),
        female: ul(700.0, 3000.0),
        children: [
            ul(300.0, 800.0),
            ul(300.0, 1100.0),
            ul(450.0, 1500.0),
            ul(600.0, 2000.0),
            ul(800.0, 2600.0),
            ul(900.0, 2800.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminD,
        male: ul(20.0, 100.0),
        female: ul(20.0, 100.0),
        children: [
            ul(20.0, 50.0),
            ul(20.0, 50.0),
            ul(20.0, 50.0),
            ul(20.0, 100.0),
            ul(20.0, 100.0),
            ul(20.0, 100.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminE,
        male: ul(14.0, 300.0),
        female: ul(12.0, 300.0),
        children: [
            ul(6.0, 100.0),
            ul(8.0, 120.0),
            ul(10.0, 160.0),
            ul(13.0, 220.0),
            ul(14.0, 260.0),
            ul(15.0, 260.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminK,
        male: rda(70.0),
        female: rda(60.0),
        children: [rda(15.0), rda(20.0), rda(30.0), rda(40.0), rda(50.0), rda(65.0)],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminC,
        male: ul(110.0, 2000.0),
        female: ul(95.0, 2000.0),
        children: [
            ul(20.0, 400.0),
            ul(30.0, 650.0),
            ul(45.0, 650.0),
            ul(65.0, 1200.0),
            ul(85.0, 1800.0),
            ul(105.0, 1800.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB1,
        male: rda(1.2),
        female: rda(1.0),
        children: [rda(0.6), rda(0.7), rda(0.9), rda(1.0), rda(1.2), rda(1.3)],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB2,
        male: rda(1.4),
        female: rda(1.1),
        children: [rda(0.7), rda(0.8), rda(1.0), rda(1.1), rda(1.4), rda(1.5)],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB3,
        male: ul(15.0, 35.0),
        female: ul(12.0, 35.0),
        children: [
            ul(8.0, 10.0),
            ul(9.0, 15.0),
            ul(11.0, 15.0),
            ul(13.0, 20.0),
            ul(15.0, 30.0),
            ul(17.0, 30.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB5,
        male: rda(5.0),
        female: rda(5.0),
        children: [rda(4.0), rda(4.0), rda(5.0), rda(5.0), rda(5.0), rda(5.0)],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB6,
        male: ul(1.6, 25.0),
        female: ul(1.4, 25.0),
        children: [
            ul(0.4, 5.0),
            ul(0.5, 7.0),
            ul(0.7, 10.0),
            ul(1.0, 15.0),
            ul(1.4, 20.0),
            ul(1.6, 20.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Biotin,
        male: rda(40.0),
        female: rda(40.0),
        children: [rda(20.0), rda(25.0), rda(30.0), rda(35.0), rda(35.0), rda(40.0)],
    },
    NutrientReference {
        nutrient: NutrientType::Folate,
        male: ul(300.0, 1000.0),
        female: ul(300.0, 1000.0),
        children: [
            ul(120.0, 200.0),
            ul(140.0, 300.0),
            ul(180.0, 400.0),
            ul(240.0, 600.0),
            ul(300.0, 800.0),
            ul(300.0, 800.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::VitaminB12,
        male: rda(4.0),
        female: rda(4.0),
        children: [rda(1.5), rda(2.0), rda(2.5), rda(3.5), rda(4.0), rda(4.0)],
    },
    // ---------------------------------------------------------------- minerals
    NutrientReference {
        nutrient: NutrientType::Calcium,
        male: ul(1000.0, 2500.0),
        female: ul(1000.0, 2500.0),
        children: [
            ul(600.0, 2500.0),
            ul(750.0, 2500.0),
            ul(900.0, 2500.0),
            ul(1100.0, 3000.0),
            ul(1200.0, 3000.0),
            ul(1200.0, 3000.0),
        ],
    },
    // The adult upper limit refers to supplemental magnesium and sits below
    // the recommended total intake. Kept as published.
    NutrientReference {
        nutrient: NutrientType::Magnesium,
        male: ul(350.0, 250.0),
        female: ul(300.0, 250.0),
        children: [rda(80.0), rda(120.0), rda(170.0), rda(230.0), rda(310.0), rda(350.0)],
    },
    NutrientReference {
        nutrient: NutrientType::Iron,
        male: ul(10.0, 45.0),
        female: ul(15.0, 45.0),
        children: [
            ul(8.0, 40.0),
            ul(8.0, 40.0),
            ul(10.0, 40.0),
            ul(12.0, 40.0),
            ul(15.0, 45.0),
            ul(15.0, 45.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Zinc,
        male: ul(14.0, 25.0),
        female: ul(8.0, 25.0),
        children: [
            ul(3.0, 7.0),
            ul(4.0, 12.0),
            ul(6.0, 12.0),
            ul(9.0, 23.0),
            ul(11.0, 23.0),
            ul(13.0, 25.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Iodine,
        male: ul(200.0, 500.0),
        female: ul(200.0, 500.0),
        children: [
            ul(100.0, 200.0),
            ul(120.0, 250.0),
            ul(140.0, 300.0),
            ul(180.0, 450.0),
            ul(200.0, 500.0),
            ul(200.0, 500.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Selenium,
        male: ul(70.0, 300.0),
        female: ul(60.0, 300.0),
        children: [
            ul(15.0, 60.0),
            ul(20.0, 90.0),
            ul(30.0, 150.0),
            ul(45.0, 280.0),
            ul(60.0, 300.0),
            ul(70.0, 300.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Copper,
        male: ul(1.5, 5.0),
        female: ul(1.25, 5.0),
        children: [
            ul(0.6, 1.0),
            ul(0.8, 2.0),
            ul(1.0, 3.0),
            ul(1.2, 3.0),
            ul(1.3, 4.0),
            ul(1.4, 4.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Manganese,
        male: ul(3.5, 11.0),
        female: ul(3.5, 11.0),
        children: [
            ul(1.5, 2.0),
            ul(2.0, 3.0),
            ul(2.5, 3.0),
            ul(3.0, 6.0),
            ul(3.5, 9.0),
            ul(3.5, 9.0),
        ],
    },
    NutrientReference {
        nutrient: NutrientType::Chromium,
        male: rda(60.0),
        female: rda(60.0),
        children: [rda(20.0), rda(25.0), rda(30.0), rda(35.0), rda(35.0), rda(40.0)],
    },
    NutrientReference {
        nutrient: NutrientType::Potassium,
        male: rda(4000.0),
        female: rda(4000.0),
        children: [
            rda(1100.0),
            rda(1300.0),
            rda(1800.0),
            rda(2700.0),
            rda(3600.0),
            rda(4000.0),
        ],
    },
];

pub(super) const DGE_SPECIAL_ROWS: [SpecialReference; 4] = [
    SpecialReference {
        nutrient: NutrientType::Folate,
        pregnant: ul(550.0, 1000.0),
        breastfeeding: ul(450.0, 1000.0),
    },
    SpecialReference {
        nutrient: NutrientType::Iron,
        pregnant: ul(30.0, 45.0),
        breastfeeding: ul(20.0, 45.0),
    },
    SpecialReference {
        nutrient: NutrientType::Iodine,
        pregnant: ul(230.0, 500.0),
        breastfeeding: ul(260.0, 500.0),
    },
    SpecialReference {
        nutrient: NutrientType::VitaminD,
        pregnant: ul(20.0, 100.0),
        breastfeeding: ul(20.0, 100.0),
    },
];
