mod common;

use card_regions::regions::{dedup_regions, overlap_fraction, DedupOptions, TypedRect};
use card_regions::{detect, Region, RegionDetector};
use common::synthetic_image::{card, checkerboard, noise, square_on_white, Canvas};

fn fixtures() -> Vec<(&'static str, Canvas)> {
    let mut framed = Canvas::filled(180, 120, 200);
    framed.stroke_rect(5, 5, 170, 110, 3, 20);
    framed.text_line(30, 50, 110, 14, 0);
    vec![
        ("square", square_on_white(200, 50, 50, 100)),
        ("card", card(240, 336)),
        ("checkerboard", checkerboard(160, 128, 32)),
        ("noise", noise(96, 80, 0, 255, 7)),
        ("soft_noise", noise(128, 128, 100, 140, 11)),
        ("framed", framed),
        ("thin", Canvas::filled(300, 3, 90)),
    ]
}

fn geometry(regions: &[Region]) -> Vec<(String, [f32; 5])> {
    regions
        .iter()
        .map(|r| {
            (
                r.kind.to_string(),
                [
                    r.bounds.x,
                    r.bounds.y,
                    r.bounds.width,
                    r.bounds.height,
                    r.confidence,
                ],
            )
        })
        .collect()
}

#[test]
fn regions_stay_inside_the_image() {
    for (name, canvas) in fixtures() {
        for r in detect(canvas.view()).unwrap() {
            let b = r.bounds;
            assert!(b.x >= 0.0 && b.y >= 0.0, "{name}: {b:?}");
            assert!(b.width > 0.0 && b.height > 0.0, "{name}: {b:?}");
            assert!(b.x + b.width <= canvas.w as f32, "{name}: {b:?}");
            assert!(b.y + b.height <= canvas.h as f32, "{name}: {b:?}");
        }
    }
}

#[test]
fn confidences_are_normalised() {
    for (name, canvas) in fixtures() {
        for r in detect(canvas.view()).unwrap() {
            assert!(
                (0.0..=1.0).contains(&r.confidence),
                "{name}: {} has confidence {}",
                r.id,
                r.confidence
            );
        }
    }
}

#[test]
fn no_two_outputs_overlap_beyond_threshold() {
    let threshold = DedupOptions::default().overlap_threshold;
    for (name, canvas) in fixtures() {
        let regions = detect(canvas.view()).unwrap();
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                let overlap = overlap_fraction(&a.rectangle(), &b.rectangle());
                assert!(
                    overlap <= threshold,
                    "{name}: {} and {} overlap by {overlap}",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn detection_is_deterministic() {
    let detector = RegionDetector::default();
    for (name, canvas) in fixtures() {
        let first = detector.detect(canvas.view()).unwrap();
        let second = detector.detect(canvas.view()).unwrap();
        assert_eq!(geometry(&first), geometry(&second), "{name}");
        // Sequential ids restart on every call.
        let ids = |rs: &[Region]| rs.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second), "{name}");
    }
}

#[test]
fn dedup_is_idempotent_on_detector_output() {
    let opts = DedupOptions::default();
    for (name, canvas) in fixtures() {
        let regions = detect(canvas.view()).unwrap();
        let typed: Vec<TypedRect> = regions
            .iter()
            .map(|r| TypedRect::new(r.kind, r.rectangle()))
            .collect();
        assert_eq!(dedup_regions(&typed, &opts), typed, "{name}");
    }
}

#[test]
fn ids_are_unique_and_layer_ids_empty() {
    for (name, canvas) in fixtures() {
        let regions = detect(canvas.view()).unwrap();
        let mut ids: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), regions.len(), "{name}");
        assert!(regions.iter().all(|r| r.layer_ids.is_empty()), "{name}");
    }
}

#[test]
fn card_mockup_finds_its_frame() {
    let canvas = card(240, 336);
    let regions = detect(canvas.view()).unwrap();
    assert!(
        regions
            .iter()
            .any(|r| r.kind == card_regions::RegionKind::Border),
        "expected at least one border region, got {regions:?}"
    );
}
