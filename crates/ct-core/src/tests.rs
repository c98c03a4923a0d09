//! Unit tests for ct-core primitives.

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{BoundingBox, GeoPoint};
    use crate::regions::SF_REGION;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(37.7, -122.4);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // WGS-84 meridian arc from 37° to 38° is ~110.99 km.
        let a = GeoPoint::new(37.0, -122.0);
        let b = GeoPoint::new(38.0, -122.0);
        let d = a.distance_m(b);
        assert!((d - 110_990.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        let origin = GeoPoint::new(37.7, -122.4);
        let north = GeoPoint::new(37.8, -122.4);
        let south = GeoPoint::new(37.6, -122.4);
        let east = GeoPoint::new(37.7, -122.3);
        let west = GeoPoint::new(37.7, -122.5);

        let n = origin.bearing_deg(north);
        assert!(n < 1e-6 || n > 360.0 - 1e-6, "got {n}");
        assert!((origin.bearing_deg(south) - 180.0).abs() < 1e-6);
        // Along a parallel the initial azimuth is slightly off 90/270.
        assert!((origin.bearing_deg(east) - 90.0).abs() < 0.1);
        assert!((origin.bearing_deg(west) - 270.0).abs() < 0.1);
    }

    #[test]
    fn bearing_is_never_negative() {
        let origin = GeoPoint::new(37.7, -122.4);
        let south_west = GeoPoint::new(37.6, -122.5);
        let b = origin.bearing_deg(south_west);
        assert!((180.0..270.0).contains(&b), "got {b}");
    }

    #[test]
    fn destination_zero_distance_is_origin() {
        let p = GeoPoint::new(37.7, -122.4);
        let q = p.destination(123.0, 0.0);
        assert!(p.distance_m(q) < 1e-6);
    }

    #[test]
    fn geodesic_round_trip() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = GeoPoint::new(rng.gen_range(37.675..37.825), rng.gen_range(-122.48..-122.35));
            let b = GeoPoint::new(rng.gen_range(37.675..37.825), rng.gen_range(-122.48..-122.35));
            let landed = a.destination(a.bearing_deg(b), a.distance_m(b));
            let miss = b.distance_m(landed);
            assert!(miss < 1e-3, "{a} -> {b} landed {landed}, off by {miss} m");
        }
    }

    #[test]
    fn bbox_contains_is_inclusive() {
        assert!(SF_REGION.contains(GeoPoint::new(37.675, -122.48)));
        assert!(SF_REGION.contains(GeoPoint::new(37.825, -122.35)));
        assert!(SF_REGION.contains(GeoPoint::new(37.7, -122.4)));
        assert!(!SF_REGION.contains(GeoPoint::new(37.6, -122.4)));
        assert!(!SF_REGION.contains(GeoPoint::new(37.7, -122.2)));
    }

    #[test]
    fn bbox_validate_rejects_degenerate() {
        assert!(SF_REGION.validate().is_ok());
        let flat = BoundingBox::from_corners((37.7, -122.5), (37.7, -122.3));
        assert!(flat.validate().is_err());
        let inverted = BoundingBox::from_corners((37.8, -122.3), (37.7, -122.5));
        assert!(inverted.validate().is_err());
    }
}

#[cfg(test)]
mod remap {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::regions::{CARLA_DOMAIN, SF_REGION, sf_to_carla};
    use crate::{AxisMap, BoundingBox, GeoPoint, Remapper, remap};

    #[test]
    fn endpoints_map_to_endpoints() {
        assert!((remap(0.0, 0.0, 10.0, 100.0, 200.0) - 100.0).abs() < 1e-12);
        assert!((remap(10.0, 0.0, 10.0, 100.0, 200.0) - 200.0).abs() < 1e-12);
        assert!((remap(5.0, 0.0, 10.0, 100.0, 200.0) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_without_clamping() {
        assert!((remap(20.0, 0.0, 10.0, 100.0, 200.0) - 300.0).abs() < 1e-9);
        assert!((remap(-10.0, 0.0, 10.0, 100.0, 200.0)).abs() < 1e-9);
    }

    #[test]
    fn axis_map_matches_free_function() {
        let m = AxisMap::new((37.675, 37.825), (-0.00187, 0.00188)).unwrap();
        let v = 37.7123;
        assert!((m.apply(v) - remap(v, 37.675, 37.825, -0.00187, 0.00188)).abs() < 1e-15);
    }

    #[test]
    fn degenerate_interval_rejected() {
        assert!(AxisMap::new((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(AxisMap::new((0.0, 1.0), (2.0, 2.0)).is_err());
    }

    #[test]
    fn sf_corners_land_on_carla_corners() {
        let r = sf_to_carla().unwrap();
        let (x, y) = r.apply(GeoPoint::new(SF_REGION.lat_min, SF_REGION.lon_min));
        assert!((x - CARLA_DOMAIN.lat_min).abs() < 1e-12);
        assert!((y - CARLA_DOMAIN.lon_min).abs() < 1e-12);
        let (x, y) = r.apply(GeoPoint::new(SF_REGION.lat_max, SF_REGION.lon_max));
        assert!((x - CARLA_DOMAIN.lat_max).abs() < 1e-12);
        assert!((y - CARLA_DOMAIN.lon_max).abs() < 1e-12);
    }

    #[test]
    fn remap_then_inverse_is_identity() {
        let a = BoundingBox::from_corners((-10.0, 5.0), (30.0, 7.5));
        let b = BoundingBox::from_corners((1000.0, -3.0), (1001.0, 42.0));
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = rng.gen_range(-10.0..30.0);
            let there = remap(v, a.lat_min, a.lat_max, b.lat_min, b.lat_max);
            let back = remap(there, b.lat_min, b.lat_max, a.lat_min, a.lat_max);
            assert!((back - v).abs() < 1e-9, "{v} -> {there} -> {back}");
        }

        let r = Remapper::new(a, b).unwrap();
        let inv = r.inverse();
        assert_eq!(inv.source(), b);
        assert_eq!(inv.target(), a);
        let p = GeoPoint::new(12.5, 6.1);
        let (x, y) = r.apply(p);
        let (lat, lon) = inv.apply(GeoPoint::new(x, y));
        assert!((lat - p.lat).abs() < 1e-9);
        assert!((lon - p.lon).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::{Cadence, TimeWindow, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp::from_unix_secs(5).unwrap();
        assert_eq!(t.millis(), 5_000);
        assert_eq!(t + Cadence::from_millis(250).unwrap(), Timestamp(5_250));
        assert_eq!(Timestamp(7_000) - Timestamp(5_000), 2_000);
        assert_eq!(Timestamp(5_000).since(Timestamp(7_000)), -2_000);
        assert!((Timestamp(1_500).as_secs_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn unix_secs_overflow_detected() {
        assert_eq!(Timestamp::from_unix_secs(-2), Some(Timestamp(-2_000)));
        assert!(Timestamp::from_unix_secs(i64::MAX).is_none());
        assert!(Timestamp::from_unix_secs(i64::MAX / 1_000 + 1).is_none());
        assert!(Timestamp::from_unix_secs(i64::MAX / 1_000).is_some());
    }

    #[test]
    fn cadence_must_be_positive() {
        assert!(Cadence::from_millis(0).is_err());
        assert!(Cadence::from_millis(-5).is_err());
        assert_eq!(Cadence::from_millis(1_000).unwrap().millis(), 1_000);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let w = TimeWindow::new(Some(Timestamp(1_000)), Some(Timestamp(2_000)));
        assert!(!w.contains(Timestamp(999)));
        assert!(w.contains(Timestamp(1_000)));
        assert!(w.contains(Timestamp(2_000)));
        assert!(!w.contains(Timestamp(2_001)));
    }

    #[test]
    fn open_ended_windows() {
        assert!(TimeWindow::UNBOUNDED.contains(Timestamp(i64::MIN)));
        let only_min = TimeWindow::new(Some(Timestamp(10)), None);
        assert!(only_min.contains(Timestamp(i64::MAX)));
        assert!(!only_min.contains(Timestamp(9)));
    }

    #[test]
    fn inverted_window_rejected() {
        let w = TimeWindow::new(Some(Timestamp(2)), Some(Timestamp(1)));
        assert!(w.validate().is_err());
        assert!(TimeWindow::UNBOUNDED.validate().is_ok());
    }
}

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_indices_past_u32() {
        assert_eq!(VehicleId::try_from(u32::MAX as usize).unwrap(), VehicleId(u32::MAX));
        assert!(VehicleId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}
