use super::star::{angular_separation_deg, cos_angle_between};
use super::*;

fn seeded_config(seed: u64) -> CatalogConfig {
    CatalogConfig {
        seed: Some(seed),
        ..CatalogConfig::default()
    }
}

#[test]
fn test_named_stars_come_first_and_exact() {
    let stars = build_catalog(&seeded_config(7));
    assert_eq!(stars.len(), bright_stars::BRIGHT_STARS.len() + 300);
    for (star, &(name, ra, dec, magnitude)) in stars.iter().zip(bright_stars::BRIGHT_STARS) {
        assert_eq!(star.name, name);
        assert_eq!(star.ra_hours, ra);
        assert_eq!(star.dec_degrees, dec);
        assert_eq!(star.magnitude, magnitude);
    }
    let sirius = &stars[0];
    assert_eq!(sirius.name, "Sirius");
    assert_eq!(sirius.magnitude, -1.46);
}

#[test]
fn test_background_points_are_in_range() {
    let config = CatalogConfig {
        background_count: 500,
        faint_magnitude_min: 4.0,
        faint_magnitude_max: 5.5,
        seed: Some(1),
    };
    let stars = build_catalog(&config);
    let background: Vec<_> = stars.iter().filter(|s| s.is_synthetic()).collect();
    assert_eq!(background.len(), 500);
    for s in background {
        assert!((0.0..24.0).contains(&s.ra_hours), "{:?}", s);
        assert!((-90.0..=90.0).contains(&s.dec_degrees), "{:?}", s);
        assert!((4.0..5.5).contains(&s.magnitude), "{:?}", s);
    }
}

#[test]
fn test_seed_makes_catalog_reproducible() {
    let first = build_catalog(&seeded_config(42));
    let second = build_catalog(&seeded_config(42));
    let other = build_catalog(&seeded_config(43));
    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_unvalidated_faint_range_does_not_panic() {
    let config = CatalogConfig {
        background_count: 5,
        faint_magnitude_min: f64::NEG_INFINITY,
        faint_magnitude_max: 6.0,
        seed: Some(3),
    };
    assert!(config.validate().is_err());
    let stars = build_catalog(&config);
    assert_eq!(stars.iter().filter(|s| s.is_synthetic()).count(), 5);

    let reversed = CatalogConfig {
        faint_magnitude_min: 6.0,
        faint_magnitude_max: 4.0,
        ..config
    };
    assert!(reversed.validate().is_err());
    assert!(build_catalog(&reversed)
        .iter()
        .filter(|s| s.is_synthetic())
        .all(|s| s.magnitude == 6.0));
    assert!(CatalogConfig::default().validate().is_ok());
}

#[test]
fn test_empty_faint_range_uses_lower_bound() {
    let config = CatalogConfig {
        background_count: 10,
        faint_magnitude_min: 5.0,
        faint_magnitude_max: 5.0,
        seed: Some(3),
    };
    let stars = build_catalog(&config);
    assert!(stars
        .iter()
        .filter(|s| s.is_synthetic())
        .all(|s| s.magnitude == 5.0));
}

#[test]
fn test_constellation_edges_respect_limits() {
    let stars = build_catalog(&seeded_config(11));
    let edges = build_constellation_graph(&stars);
    assert!(!edges.is_empty());
    for edge in &edges {
        assert!(edge.separation_deg() < CONSTELLATION_MAX_SEPARATION_DEG);
        for end in [&edge.a, &edge.b] {
            assert!(end.magnitude < CONSTELLATION_MAGNITUDE_LIMIT, "{}", end.name);
            assert!(!end.is_synthetic(), "{}", end.name);
        }
    }
}

#[test]
fn test_constellation_graph_is_complete_over_candidates() {
    let stars = build_catalog(&seeded_config(5));
    let edges = build_constellation_graph(&stars);
    let candidates: Vec<_> = stars
        .iter()
        .filter(|s| s.magnitude < CONSTELLATION_MAGNITUDE_LIMIT && !s.is_synthetic())
        .collect();
    let mut expected = 0;
    for i in 0..candidates.len() {
        for j in i + 1..candidates.len() {
            if angular_separation_deg(candidates[i], candidates[j]) < 30.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(edges.len(), expected);
}

#[test]
fn test_constellation_edges_share_catalog_points() {
    let stars = build_catalog(&seeded_config(9));
    let edges = build_constellation_graph(&stars);
    for edge in &edges {
        assert!(stars.iter().any(|s| Arc::ptr_eq(s, &edge.a)));
        assert!(stars.iter().any(|s| Arc::ptr_eq(s, &edge.b)));
    }
}

#[test]
fn test_orion_belt_is_connected() {
    let stars = build_catalog(&seeded_config(2));
    let edges = build_constellation_graph(&stars);
    let connected = |x: &str, y: &str| {
        edges.iter().any(|e| {
            (e.a.name == x && e.b.name == y) || (e.a.name == y && e.b.name == x)
        })
    };
    assert!(connected("Alnilam", "Alnitak"));
    assert!(connected("Betelgeuse", "Rigel"));
    // Saiph and Mintaka are too faint to take part
    for faint in ["Saiph", "Mintaka"] {
        assert!(!edges.iter().any(|e| e.a.name == faint || e.b.name == faint));
    }
    // Sirius and Vega are on opposite sides of the sky
    assert!(!connected("Sirius", "Vega"));
}

#[test]
fn test_bright_background_points_are_never_connected() {
    let config = CatalogConfig {
        background_count: 50,
        faint_magnitude_min: -1.0,
        faint_magnitude_max: 1.0,
        seed: Some(8),
    };
    let stars = build_catalog(&config);
    let edges = build_constellation_graph(&stars);
    assert!(edges
        .iter()
        .all(|e| !e.a.is_synthetic() && !e.b.is_synthetic()));
}

#[test]
fn test_law_of_cosines_agrees_with_unit_vectors() {
    let stars = build_catalog(&seeded_config(13));
    for pair in stars.windows(2).take(100) {
        let by_vectors = cos_angle_between(&pair[0], &pair[1])
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees();
        assert!((angular_separation_deg(&pair[0], &pair[1]) - by_vectors).abs() < 1e-6);
    }
}

#[test]
fn test_star_catalog_find() {
    let catalog = StarCatalog::build(&seeded_config(4));
    assert_eq!(catalog.find("vega").map(|s| s.ra_hours), Some(18.6156));
    assert!(catalog.find("BG-0").is_none());
    assert!(catalog.find("Proxima b").is_none());
    assert_eq!(
        catalog.constellations.len(),
        build_constellation_graph(&catalog.stars).len()
    );
}
