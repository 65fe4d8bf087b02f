//! Property tests: codec round trip and the selection invariant.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shapelab_lib::codec;
use shapelab_lib::color::HexColor;
use shapelab_lib::state::SceneDocument;
use shapelab_lib::validation::SceneValidator;
use shared::ShapeKind;

#[derive(Debug, Clone)]
enum Op {
    Add(ShapeKind),
    Remove(usize),
    Select(usize),
    Move(f64, f64, f64),
    Scale(f64),
    Color(u32),
    Clear,
}

fn shape() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        Just(ShapeKind::Cube),
        Just(ShapeKind::Sphere),
        Just(ShapeKind::Cylinder)
    ]
}

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1e6f64..1e6,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => shape().prop_map(Op::Add),
        2 => (0usize..12).prop_map(Op::Remove),
        2 => (0usize..12).prop_map(Op::Select),
        1 => (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Op::Move(x, y, z)),
        1 => (-5.0f64..50.0).prop_map(Op::Scale),
        1 => (0u32..0x0100_0000).prop_map(Op::Color),
        1 => Just(Op::Clear),
    ]
}

fn apply(doc: &mut SceneDocument, rng: &mut StdRng, op: &Op) {
    match *op {
        Op::Add(shape) => {
            doc.add_object_with_rng(shape, HexColor::default(), rng);
        }
        Op::Remove(i) => {
            let _ = doc.remove_object(i);
        }
        Op::Select(i) => {
            let _ = doc.select_object(i);
        }
        Op::Move(x, y, z) => {
            let _ = doc.set_position(x, y, z);
        }
        Op::Scale(s) => {
            let _ = doc.set_scale(s);
        }
        Op::Color(rgb) => {
            let _ = doc.set_color(&format!("#{rgb:06X}"));
        }
        Op::Clear => doc.clear(),
    }
}

proptest! {
    #[test]
    fn selection_stays_valid(ops in prop::collection::vec(op(), 0..60), seed in any::<u64>()) {
        let mut doc = SceneDocument::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for op in &ops {
            apply(&mut doc, &mut rng, op);
            let errors = SceneValidator::new(&doc).validate_all();
            prop_assert!(errors.is_empty(), "after {:?}: {:?}", op, errors);
            prop_assert_eq!(doc.selected_index().is_none(), doc.is_empty());
        }
    }

    #[test]
    fn codec_round_trip_is_exact(ops in prop::collection::vec(op(), 0..40), seed in any::<u64>()) {
        let mut doc = SceneDocument::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for op in &ops {
            apply(&mut doc, &mut rng, op);
        }

        let restored = codec::deserialize(&codec::serialize(&doc));
        prop_assert_eq!(restored.len(), doc.len());
        for (a, b) in doc.objects().iter().zip(restored.objects()) {
            prop_assert!(a.same_content(b), "{:?} != {:?}", a, b);
        }

        // through JSON as well
        let json = codec::to_json(&doc).unwrap();
        prop_assert!(!json.contains("null"));
        let from_json = codec::from_json(&json).unwrap();
        for (a, b) in doc.objects().iter().zip(from_json.objects()) {
            prop_assert!(a.same_content(b), "{:?} != {:?}", a, b);
        }
    }
}
