//! Colony-level aggregation
//!
//! Groups normalized records into named-location cohorts and computes the
//! summary statistics the presenter maps: member count, Toxoplasma
//! prevalence at the clinical cutoff, and the coordinate centroid. Grouping
//! is by colony identity, never by input position, and a colony with zero
//! qualifying members simply produces no cohort.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::cat::CatRecord;
use crate::models::colony::ColonyCohort;

/// Group records by colony and compute one cohort per non-empty group.
///
/// Members with a null 160-threshold flag are excluded from both the
/// numerator and the denominator of the prevalence; members without
/// coordinates are excluded from the centroid. The output is sorted by
/// colony id so repeated runs are bit-identical; relative display ordering
/// beyond that is the presenter's concern.
#[must_use]
pub fn aggregate_colonies(records: &[CatRecord]) -> Vec<ColonyCohort> {
    let groups = records.iter().into_group_map_by(|r| r.colony_id.as_str());

    groups
        .into_iter()
        .sorted_by(|a, b| Ord::cmp(a.0, b.0))
        .map(|(colony_id, members)| {
            let assessable: Vec<bool> =
                members.iter().filter_map(|m| m.toxo_exposed_160).collect();
            let toxo_prevalence_pct = if assessable.is_empty() {
                None
            } else {
                let positives = assessable.iter().filter(|&&flag| flag).count();
                Some(100.0 * positives as f64 / assessable.len() as f64)
            };

            let coordinates: Vec<(f64, f64)> = members
                .iter()
                .filter_map(|m| m.latitude.zip(m.longitude))
                .collect();
            let (centroid_latitude, centroid_longitude) = if coordinates.is_empty() {
                (None, None)
            } else {
                let n = coordinates.len() as f64;
                (
                    Some(coordinates.iter().map(|c| c.0).sum::<f64>() / n),
                    Some(coordinates.iter().map(|c| c.1).sum::<f64>() / n),
                )
            };

            ColonyCohort {
                colony_id: colony_id.to_string(),
                size: members.len(),
                toxo_prevalence_pct,
                centroid_latitude,
                centroid_longitude,
            }
        })
        .collect()
}

/// Count members per joint FIV x FeLV state.
///
/// Every record falls in exactly one bucket, so the counts always sum to the
/// record count.
#[must_use]
pub fn retro_interaction_counts(records: &[CatRecord]) -> FxHashMap<(bool, bool), usize> {
    let mut counts = FxHashMap::default();
    for record in records {
        *counts
            .entry((record.fiv_exposed, record.felv_exposed))
            .or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::serology::ExposureProfile;
    use crate::models::types::{AgeClass, LifeStage};

    fn member(colony: &str, titer: Option<f64>, lat: Option<f64>, lon: Option<f64>) -> CatRecord {
        let profile = ExposureProfile::classify(titer);
        CatRecord {
            colony_id: colony.to_string(),
            age_class: AgeClass::OverTwelveMonths,
            life_stage: LifeStage::Adult,
            collection_day_of_year: 90,
            latitude: lat,
            longitude: lon,
            toxo_titer: titer,
            toxo_exposed_40: profile.detectable,
            toxo_exposed_160: profile.clinical,
            toxo_exposed_320: profile.high_titer,
            fiv_exposed: false,
            felv_exposed: false,
        }
    }

    #[test]
    fn test_prevalence_two_of_three() {
        let records = vec![
            member("pier", Some(320.0), Some(32.0), Some(-117.0)),
            member("pier", Some(160.0), Some(33.0), Some(-118.0)),
            member("pier", Some(40.0), Some(34.0), Some(-119.0)),
        ];

        let cohorts = aggregate_colonies(&records);
        assert_eq!(cohorts.len(), 1);
        let pier = &cohorts[0];
        assert_eq!(pier.size, 3);
        let pct = pier.toxo_prevalence_pct.unwrap();
        assert!((pct - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_null_flags_excluded_from_both_sides() {
        let records = vec![
            member("creek", Some(320.0), Some(45.0), Some(-122.0)),
            member("creek", None, Some(45.5), Some(-122.5)),
        ];

        let cohorts = aggregate_colonies(&records);
        let creek = &cohorts[0];
        assert_eq!(creek.size, 2);
        // One assessable member, one positive
        assert_eq!(creek.toxo_prevalence_pct, Some(100.0));
    }

    #[test]
    fn test_centroid_skips_members_without_coordinates() {
        let records = vec![
            member("mesa", Some(40.0), Some(10.0), Some(20.0)),
            member("mesa", Some(40.0), Some(30.0), Some(40.0)),
            member("mesa", Some(40.0), None, Some(50.0)),
        ];

        let cohorts = aggregate_colonies(&records);
        let mesa = &cohorts[0];
        assert_eq!(mesa.centroid_latitude, Some(20.0));
        assert_eq!(mesa.centroid_longitude, Some(30.0));
    }

    #[test]
    fn test_grouping_ignores_input_order() {
        let forward = vec![
            member("a", Some(160.0), Some(1.0), Some(1.0)),
            member("b", Some(40.0), Some(2.0), Some(2.0)),
            member("a", Some(40.0), Some(3.0), Some(3.0)),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(aggregate_colonies(&forward), aggregate_colonies(&reversed));
    }

    #[test]
    fn test_interaction_counts_partition_records() {
        let mut records = vec![
            member("a", Some(40.0), None, None),
            member("a", Some(40.0), None, None),
            member("a", Some(40.0), None, None),
        ];
        records[0].fiv_exposed = true;
        records[1].fiv_exposed = true;
        records[1].felv_exposed = true;

        let counts = retro_interaction_counts(&records);
        assert_eq!(counts.values().sum::<usize>(), records.len());
        assert_eq!(counts.get(&(true, true)), Some(&1));
        assert_eq!(counts.get(&(true, false)), Some(&1));
        assert_eq!(counts.get(&(false, false)), Some(&1));
    }
}
