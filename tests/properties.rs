use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vector2d::vec_core::consts::{COMPONENT_EPSILON, EPSILON};
use vector2d::{Vector2D, VectorError};

const SAMPLES: usize = 500;

fn random_vectors(seed: u64) -> Vec<Vector2D> {
    let mut rnd = StdRng::seed_from_u64(seed);

    (0..SAMPLES)
        .map(|_| Vector2D::new(rnd.gen_range(-100.0..100.0), rnd.gen_range(-100.0..100.0)))
        .collect()
}

fn assert_close(a: Vector2D, b: Vector2D, epsilon: f64) {
    assert!(
        (a.x() - b.x()).abs() <= epsilon && (a.y() - b.y()).abs() <= epsilon,
        "{} is not within {} of {}",
        a,
        epsilon,
        b
    );
}

#[test]
fn additive_inverse() {
    for v in random_vectors(1) {
        assert_eq!(v + (Vector2D::ZERO - v), Vector2D::ZERO);
        assert_eq!(v + -v, Vector2D::ZERO);
    }
}

#[test]
fn addition_and_dot_commute() {
    let left = random_vectors(2);
    let right = random_vectors(3);

    for (&a, &b) in left.iter().zip(right.iter()) {
        assert_eq!(a + b, b + a);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a * b, a.dot(b));
    }
}

#[test]
fn scaling() {
    for v in random_vectors(4) {
        assert_eq!(v * 1.0, v);
        assert!((v.scale(2.0).length() - 2.0 * v.length()).abs() < EPSILON);
    }
}

#[test]
fn normalized_has_unit_length() {
    for v in random_vectors(5) {
        if v == Vector2D::ZERO {
            continue;
        }

        // each stored component is off by at most 0.005
        let length = v.normalized().length();
        assert!((length - 1.0).abs() < 0.01, "{} normalized to length {}", v, length);
    }
}

#[test]
fn rotation_round_trip() {
    let mut rnd = StdRng::seed_from_u64(6);

    for v in random_vectors(7) {
        assert_close(v.rotate(90.0).rotate(-90.0), v, COMPONENT_EPSILON);

        let degrees = rnd.gen_range(-360.0..360.0);
        assert_close(v.rotate(degrees).rotate(-degrees), v, COMPONENT_EPSILON);
    }
}

#[test]
fn rotation_preserves_angle() {
    for v in random_vectors(8) {
        if v.length() < 1.0 {
            continue;
        }

        let angle = v.angle_between(v.rotate(90.0));
        assert!(matches!(angle, Ok(89..=91)), "{} gave {:?}", v, angle);
    }
}

#[test]
fn angles_stay_in_range() {
    let left = random_vectors(9);
    let right = random_vectors(10);

    for (&a, &b) in left.iter().zip(right.iter()) {
        match a.angle_between(b) {
            Ok(angle) => {
                assert!((0..=180).contains(&angle));
                assert_eq!(Ok(angle), b.angle_between(a));
            }
            Err(err) => assert_eq!(err, VectorError::ZeroLength),
        }
    }
}
