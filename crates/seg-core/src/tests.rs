//! Unit tests for seg-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn red_is_minority() {
        assert!(Color::Red.is_minority());
        assert!(!Color::Blue.is_minority());
    }

    #[test]
    fn other_flips() {
        assert_eq!(Color::Red.other(), Color::Blue);
        assert_eq!(Color::Blue.other(), Color::Red);
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Blue.to_string(), "blue");
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(42);
        let mut v: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(9);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::ModelConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = ModelConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.capacity(), 400);
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = ModelConfig { width: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { height: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn density_out_of_range_rejected() {
        let cfg = ModelConfig { density: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { density: -0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn minority_fraction_out_of_range_rejected() {
        let cfg = ModelConfig { minority_fraction: 2.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn full_density_is_legal() {
        let cfg = ModelConfig { density: 1.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }
}
