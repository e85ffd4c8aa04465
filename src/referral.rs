//! Disease to specialist referral table
//!
//! Static mapping curated alongside the training data. Lookup is total:
//! diseases the table does not know resolve to the general-physician
//! default, never an error.

/// Fallback recommendation for diseases without a dedicated entry.
pub const DEFAULT_SPECIALIST: &str = "General Physician";

/// All curated referral entries, in the order of the reference table.
pub const REFERRALS: &[(&str, &str)] = &[
    ("Fungal infection", "Dermatologist (Skin Specialist)"),
    ("Allergy", "Immunologist / General Physician"),
    ("GERD", "Gastroenterologist"),
    ("Chronic cholestasis", "Hepatologist / Gastroenterologist"),
    ("Drug Reaction", "Dermatologist / Allergist"),
    ("Peptic ulcer disease", "Gastroenterologist"),
    ("AIDS", "Infectious Disease Specialist"),
    ("Diabetes", "Endocrinologist"),
    ("Gastroenteritis", "Gastroenterologist"),
    ("Bronchial Asthma", "Pulmonologist"),
    ("Hypertension", "Cardiologist"),
    ("Migraine", "Neurologist"),
    ("Cervical spondylosis", "Orthopedic / Neurologist"),
    ("Paralysis (brain hemorrhage)", "Neurologist"),
    ("Jaundice", "Hepatologist"),
    ("Malaria", "Infectious Disease Specialist / General Physician"),
    ("Chicken pox", "Dermatologist / Infectious Disease Specialist"),
    ("Dengue", "Infectious Disease Specialist"),
    ("Typhoid", "Infectious Disease Specialist"),
    ("Hepatitis A", "Hepatologist"),
    ("Hepatitis B", "Hepatologist"),
    ("Hepatitis C", "Hepatologist"),
    ("Hepatitis D", "Hepatologist"),
    ("Hepatitis E", "Hepatologist"),
    ("Alcoholic hepatitis", "Hepatologist"),
    ("Tuberculosis", "Pulmonologist / Infectious Disease Specialist"),
    ("Common Cold", "General Physician"),
    ("Pneumonia", "Pulmonologist"),
    ("Dimorphic hemorrhoids(piles)", "Proctologist / Gastroenterologist"),
    ("Heart attack", "Cardiologist"),
    ("Varicose veins", "Vascular Surgeon"),
    ("Hypothyroidism", "Endocrinologist"),
    ("Hyperthyroidism", "Endocrinologist"),
    ("Hypoglycemia", "Endocrinologist"),
    ("Osteoarthristis", "Orthopedic"),
    ("Arthritis", "Rheumatologist"),
    ("(vertigo) Paroymsal  Positional Vertigo", "ENT Specialist / Neurologist"),
    ("Acne", "Dermatologist"),
    ("Urinary tract infection", "Urologist"),
    ("Psoriasis", "Dermatologist"),
    ("Impetigo", "Dermatologist"),
];

/// Look up the recommended specialist for a disease.
///
/// Total function: unknown diseases fall through to
/// [`DEFAULT_SPECIALIST`].
pub fn specialist_for(disease: &str) -> &'static str {
    REFERRALS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, specialist)| *specialist)
        .unwrap_or(DEFAULT_SPECIALIST)
}
