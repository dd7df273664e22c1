//! Column-name constants for the raw field-survey layout.
//!
//! Single source of truth for the names the external loader is expected to
//! deliver. Adapters and tests reference these constants instead of repeating
//! string literals.

/// Survey sheet columns, one row per sampled individual.
pub mod survey {
    /// Named location/group the cat is affiliated with
    pub const COLONY_ID: &str = "colony_id";
    /// Managed-colony vs other cohort classification tag
    pub const COHORT_TYPE: &str = "cohort_type";
    /// Sampling site longitude, decimal degrees
    pub const LONGITUDE: &str = "longitude";
    /// Sampling site latitude, decimal degrees
    pub const LATITUDE: &str = "latitude";
    /// Collection date, month/day/year text
    pub const COLLECTION_DATE: &str = "collection_date";
    /// Age bracket label
    pub const AGE_CLASS: &str = "age_class";
    /// Life-stage bracket label
    pub const LIFE_STAGE: &str = "life_stage";
    /// Toxoplasma IgG titer as reported by the laboratory (free text)
    pub const TOXO_TITER: &str = "toxo_titer";
    /// FIV serology flag, 0/1
    pub const FIV: &str = "fiv";
    /// FeLV serology flag, 0/1
    pub const FELV: &str = "felv";

    /// Every column a row must provide to qualify for normalization
    pub const REQUIRED: [&str; 10] = [
        COLONY_ID,
        COHORT_TYPE,
        LONGITUDE,
        LATITUDE,
        COLLECTION_DATE,
        AGE_CLASS,
        LIFE_STAGE,
        TOXO_TITER,
        FIV,
        FELV,
    ];
}
