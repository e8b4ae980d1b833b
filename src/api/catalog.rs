//! Hard-coded specialist directory and health tips

use crate::api::models::Specialist;

const SPECIALISTS: [(u32, &str, &str, f64); 5] = [
    (1, "Dr. Rajesh Kumar", "Cardiology", 4.8),
    (2, "Dr. Priya Sharma", "Dermatology", 4.7),
    (3, "Dr. Amit Patel", "Neurology", 4.9),
    (4, "Dr. Anjali Singh", "Pediatrics", 4.6),
    (5, "Dr. Vikram Gupta", "Orthopedics", 4.8),
];

const HEALTH_TIPS: [&str; 5] = [
    "Stay hydrated - at least 8 glasses of water daily.",
    "Exercise regularly for 30 minutes a day.",
    "Sleep 7–9 hours every night.",
    "Eat fruits and vegetables daily.",
    "Practice stress management (yoga, breathing).",
];

pub fn specialists() -> Vec<Specialist> {
    SPECIALISTS
        .iter()
        .map(|&(id, name, specialty, rating)| Specialist {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            rating,
        })
        .collect()
}

pub fn health_tips() -> Vec<String> {
    HEALTH_TIPS.iter().map(|tip| tip.to_string()).collect()
}
