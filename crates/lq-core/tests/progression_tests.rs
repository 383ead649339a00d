//! Property tests for the progression invariants

use lq_core::catalog::{GoldReward, TaskDef};
use lq_core::player::{AttrId, Attribute, EnergyLedger, StatId};
use lq_core::task::effective_success_prob;
use proptest::prelude::*;

proptest! {
    #[test]
    fn add_xp_preserves_invariants(amounts in prop::collection::vec(0u32..5_000, 0..50)) {
        let mut a = Attribute::new();
        for amount in amounts {
            a.add_xp(amount);
            prop_assert!(a.level >= 1);
            prop_assert!(a.xp < a.threshold);
            prop_assert_eq!(a.threshold, 100 * a.level);
        }
    }

    #[test]
    fn add_xp_conserves_total_xp(amounts in prop::collection::vec(0u32..5_000, 0..50)) {
        // Cumulative cost of reaching level n is 100 * (1 + 2 + ... + n-1).
        let mut a = Attribute::new();
        let mut total: u64 = 0;
        for amount in amounts {
            total += u64::from(amount);
            a.add_xp(amount);
        }
        let levels = u64::from(a.level) - 1;
        let consumed = 100 * levels * (levels + 1) / 2;
        prop_assert_eq!(consumed + u64::from(a.xp), total);
    }

    #[test]
    fn energy_stays_in_bounds(
        max in 1u32..500,
        ops in prop::collection::vec((any::<bool>(), 0u32..200), 0..50),
    ) {
        let mut e = EnergyLedger::new(max);
        for (is_spend, amount) in ops {
            if is_spend {
                let _ = e.spend(amount);
            } else {
                e.credit(amount);
            }
            prop_assert!(e.current() <= e.max());
        }
    }

    #[test]
    fn regeneration_is_monotonic_and_capped(current in 0u32..100, elapsed in -100_000i64..1_000_000) {
        let mut e = EnergyLedger::from_parts(current, 100);
        let before = e.current();
        e.regenerate(elapsed);
        prop_assert!(e.current() >= before);
        prop_assert!(e.current() <= e.max());
    }

    #[test]
    fn success_probability_never_exceeds_cap(base in 0.01f64..=1.0, level in 1u32..10_000) {
        let task = TaskDef {
            id: "t",
            name: "t",
            target: AttrId::Stat(StatId::Mind),
            xp_reward: 10,
            gold_reward: GoldReward::Fixed(0),
            energy_cost: 1,
            base_success_prob: base,
        };
        let p = effective_success_prob(&task, level);
        prop_assert!(p <= 0.95);
        prop_assert!(p >= base.min(0.95));
    }
}
