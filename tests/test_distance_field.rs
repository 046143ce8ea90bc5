//! Integration tests for ray/ellipse intersection and the signed distance sweep
//!
//! Covers boundary parametrization, quadrant handling, vertical rays and
//! degenerate configurations.

use ellidist::geometry::intersect::{closed_form_x, intersect};
use ellidist::geometry::parametric;
use ellidist::{Config, ConfigWarning, DistanceField, Ellipse, GeometryError};

const TOL: f64 = 1e-6;

fn outer() -> Ellipse {
    Ellipse::axis_aligned(6.5, 6.0).unwrap()
}

fn inner() -> Ellipse {
    Ellipse::new(6.0, 5.0, 20.0).unwrap()
}

fn sweep_angles() -> impl Iterator<Item = f64> {
    (0..720).map(|i| i as f64 * 0.5)
}

#[test]
fn test_unrotated_parametrization_is_standard() {
    let e = Ellipse::axis_aligned(3.0, 2.0).unwrap();
    for t in sweep_angles() {
        let p = parametric::point(t, &e);
        let r = t.to_radians();
        assert!((p.x - 3.0 * r.cos()).abs() < 1e-12, "t={}", t);
        assert!((p.y - 2.0 * r.sin()).abs() < 1e-12, "t={}", t);
    }
}

#[test]
fn test_intersections_satisfy_implicit_equation() {
    for ellipse in [
        outer(),
        inner(),
        Ellipse::new(1.0, 9.0, -35.0).unwrap(),
        Ellipse::new(4.0, 4.0, 90.0).unwrap(),
        Ellipse::new(6.0, 5.0, 270.0).unwrap(),
    ] {
        for t in sweep_angles() {
            let p = intersect(t, &ellipse).unwrap();
            let residual = (ellipse.implicit(p) - 1.0).abs();
            assert!(
                residual < TOL,
                "t={} ellipse={:?}: residual {}",
                t,
                ellipse,
                residual
            );
        }
    }
}

#[test]
fn test_unrotated_matches_closed_form() {
    let e = outer();
    for t in sweep_angles().filter(|&t| t != 90.0 && t != 270.0) {
        let p = intersect(t, &e).unwrap();
        let x = closed_form_x(t, e.a(), e.b());
        assert!((p.x - x).abs() < TOL, "t={}: {} vs {}", t, p.x, x);
    }
}

#[test]
fn test_crossing_lies_on_the_ray() {
    let e = inner();
    for t in sweep_angles() {
        let p = intersect(t, &e).unwrap();
        let n = t.rem_euclid(360.0);
        if n > 90.0 && n < 270.0 {
            assert!(p.x <= 0.0, "t={}: x={}", t, p.x);
        } else if n != 90.0 && n != 270.0 {
            assert!(p.x >= 0.0, "t={}: x={}", t, p.x);
        }
        // direction from the origin matches the ray direction
        let (s, c) = t.to_radians().sin_cos();
        assert!(p.x * c + p.y * s > 0.0, "t={}: point behind origin", t);
    }
}

#[test]
fn test_negative_angles_use_same_quadrants() {
    let e = inner();
    for t in [-45.0, -89.0, -91.0, -180.0, -300.0] {
        let a = intersect(t, &e).unwrap();
        let b = intersect(t + 360.0, &e).unwrap();
        assert!((a.x - b.x).abs() < TOL && (a.y - b.y).abs() < TOL, "t={}", t);
    }
}

#[test]
fn test_identical_ellipses_have_zero_distance() {
    let e = Ellipse::axis_aligned(6.5, 6.0).unwrap();
    let field = DistanceField::new(e, e);
    let sweep = field.sweep(0.1);
    assert_eq!(sweep.len(), 3600);
    for s in &sweep.samples {
        assert_eq!(s.distance, Ok(0.0), "angle {}", s.angle);
    }
}

#[test]
fn test_reference_scenario_at_45_degrees() {
    let field = DistanceField::new(outer(), inner());
    let (o, i) = field.crossings(45.0).unwrap();

    let expected = 6.5 * 6.0 / (6.0_f64 * 6.0 + 6.5 * 6.5).sqrt();
    assert!((o.x - expected).abs() < TOL);
    assert!((o.y - expected).abs() < TOL);
    assert!((inner().implicit(i) - 1.0).abs() < TOL);
    assert!((i.x - i.y).abs() < TOL, "inner crossing must sit on the diagonal");

    let d = field.sample(45.0).unwrap();
    assert!(d.is_finite());
    assert_eq!(d.signum(), (o.x - i.x).signum());
    assert!((d.abs() - (o - i).norm()).abs() < 1e-12);
}

#[test]
fn test_vertical_ray_matches_limits() {
    for e in [outer(), inner()] {
        let at = intersect(90.0, &e).unwrap();
        for t in [89.9999, 90.0001] {
            let near = intersect(t, &e).unwrap();
            assert!(
                (near.x - at.x).abs() < 1e-3 && (near.y - at.y).abs() < 1e-3,
                "t={}: {:?} vs {:?}",
                t,
                near,
                at
            );
        }
        let down = intersect(270.0, &e).unwrap();
        for t in [269.9999, 270.0001] {
            let near = intersect(t, &e).unwrap();
            assert!((near.y - down.y).abs() < 1e-3, "t={}", t);
        }
        assert!(down.y < 0.0);
    }
}

#[test]
fn test_vertical_sample_is_finite() {
    let field = DistanceField::new(outer(), inner());
    let up = field.sample(90.0).unwrap();
    assert!(up.is_finite());
    // the inner crossing sits lower, so the gap equals the difference in height
    let (o, i) = field.crossings(90.0).unwrap();
    assert!((up.abs() - (o.y - i.y)).abs() < 1e-9);
}

#[test]
fn test_degenerate_configuration_is_reported_not_fatal() {
    let mut config = Config::default();
    config.inner.rotation = 90.0;
    config.inner.a = config.outer.b;

    assert!(matches!(
        config.preflight().as_slice(),
        [ConfigWarning::AlignedRadii { .. }]
    ));

    let sweep = config.distance_field().unwrap().sweep(0.1);
    assert_eq!(sweep.len(), 3600);
    for s in &sweep.samples {
        match s.distance {
            Ok(d) => assert!(d.is_finite(), "angle {}: {}", s.angle, d),
            Err(GeometryError::UndefinedSign { .. })
            | Err(GeometryError::DegenerateIntersection { .. }) => {}
            Err(e) => panic!("angle {}: unexpected {}", s.angle, e),
        }
    }
}

#[test]
fn test_overflowing_configuration_marks_every_sample() {
    let huge = Ellipse::axis_aligned(1e200, 1e200).unwrap();
    let field = DistanceField::new(huge, huge);
    let sweep = field.sweep(45.0);
    assert_eq!(sweep.len(), 8);
    assert_eq!(sweep.undefined_count(), 8);
    assert!(sweep
        .undefined()
        .all(|(_, e)| matches!(e, GeometryError::DegenerateIntersection { .. })));
    assert_eq!(sweep.min(), None);
}

#[test]
fn test_sweep_sign_changes_with_rotation() {
    // a circle inside a rotated ellipse that pokes out along its major axis
    let outer = Ellipse::axis_aligned(5.0, 5.0).unwrap();
    let inner = Ellipse::new(6.0, 4.0, 45.0).unwrap();
    let field = DistanceField::new(outer, inner);

    let along_major = field.sample(45.0).unwrap();
    let along_minor = field.sample(135.0).unwrap();
    assert!((along_major.abs() - 1.0).abs() < TOL);
    assert!((along_minor.abs() - 1.0).abs() < TOL);
    // inner point further out at 45°: outer.x - inner.x < 0
    assert!(along_major < 0.0);
    // at 135° the inner point is closer, both x negative, outer further left
    assert!(along_minor < 0.0);
}
