//! Property tests for simulation result aggregation.

use proptest::prelude::*;

use nb_to_blog::simulation::{PersonRecord, PersonState, SimulationResult};

fn state() -> impl Strategy<Value = PersonState> {
    prop_oneof![
        Just(PersonState::Untouched),
        Just(PersonState::Infected),
        Just(PersonState::Recovered),
        Just(PersonState::Deceased),
    ]
}

fn day() -> impl Strategy<Value = Vec<PersonRecord>> {
    proptest::collection::vec(
        (0u32..5, state()).prop_map(|(hood, state)| PersonRecord::new(hood, state)),
        1..=40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: daily tables count every record exactly once, per hood and state.
    #[test]
    fn property_day_counts_match_records(records in day()) {
        let mut result = SimulationResult::new(records.len() as u64, 1, None, None);
        let counts = result.add_day_results(&records).unwrap().clone();

        for (hood, row) in &counts {
            for state in PersonState::ALL {
                let expected = records
                    .iter()
                    .filter(|r| r.hood_id == *hood && r.state == state)
                    .count() as u64;
                prop_assert_eq!(row.get(state), expected);
            }
        }
        let total: u64 = counts.values().map(|c| c.total()).sum();
        prop_assert_eq!(total, records.len() as u64);
    }

    /// PROPERTY: finalize matches the definitions over the accumulated days.
    #[test]
    fn property_finalize_statistics(days in proptest::collection::vec(day(), 1..=6)) {
        let pop_size = days.iter().map(|d| d.len() as u64).max().unwrap_or(0);
        let mut result = SimulationResult::new(pop_size, days.len() as u32, None, None);
        for records in &days {
            result.add_day_results(records).unwrap();
        }
        let summary = result.finalize().unwrap().clone();

        let count = |records: &[PersonRecord], state: PersonState| {
            records.iter().filter(|r| r.state == state).count() as u64
        };
        let last = days.last().unwrap();
        let peak = days.iter().map(|d| count(d.as_slice(), PersonState::Infected)).max().unwrap();

        prop_assert_eq!(summary.num_deceased, count(last.as_slice(), PersonState::Deceased));
        prop_assert_eq!(summary.total_affected, pop_size - count(last.as_slice(), PersonState::Untouched));
        prop_assert_eq!(summary.peak_infected, peak);
        prop_assert_eq!(summary.overall_counts.len(), days.len());
    }
}
