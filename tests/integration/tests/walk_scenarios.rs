//! Integration tests for the value walker
//!
//! Walks every supported shape through the public API and checks the
//! reported leaves.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

use pretty_assertions::assert_eq;
use rstest::rstest;
use textwalk_walker::{
    Producer, Walk, WalkConfig, WalkError, Walker, collect_texts, impl_record, walk,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn walk_to_vec<W: Walk + ?Sized>(value: &W) -> Vec<String> {
    init_tracing();
    let mut got = Vec::new();
    walk(value, |text| got.push(text.to_string())).unwrap();
    got
}

struct Named {
    name: String,
}

struct NameAndCity {
    name: String,
    city: String,
}

struct NameAndAge {
    name: String,
    age: i64,
}

struct Person {
    name: String,
    profile: Profile,
}

#[derive(Clone)]
struct Profile {
    age: i64,
    city: String,
}

impl_record!(Named { name });
impl_record!(NameAndCity { name, city });
impl_record!(NameAndAge { name, age });
impl_record!(Person { name, profile });
impl_record!(Profile { age, city });

fn profile(age: i64, city: &str) -> Profile {
    Profile {
        age,
        city: city.to_string(),
    }
}

fn person(name: &str, age: i64, city: &str) -> Person {
    Person {
        name: name.to_string(),
        profile: profile(age, city),
    }
}

mod ordered_shapes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::solo_string(Box::new("Nuriddin"), vec!["Nuriddin"])]
    #[case::struct_with_one_string_field(
        Box::new(Named { name: "Nuriddin".into() }),
        vec!["Nuriddin"]
    )]
    #[case::struct_with_two_string_fields(
        Box::new(NameAndCity { name: "Nuriddin".into(), city: "Tashkent".into() }),
        vec!["Nuriddin", "Tashkent"]
    )]
    #[case::struct_with_non_string_field(
        Box::new(NameAndAge { name: "Nuriddin".into(), age: 22 }),
        vec!["Nuriddin"]
    )]
    #[case::struct_with_nested_fields(
        Box::new(person("Nuriddin", 33, "London")),
        vec!["Nuriddin", "London"]
    )]
    #[case::pointers_to_things(
        Box::new(Rc::new(person("Dilshod", 33, "London"))),
        vec!["Dilshod", "London"]
    )]
    #[case::slices(
        Box::new(vec![profile(33, "London"), profile(34, "Tashkent")]),
        vec!["London", "Tashkent"]
    )]
    #[case::arrays(
        Box::new([profile(33, "London"), profile(34, "Tashkent")]),
        vec!["London", "Tashkent"]
    )]
    #[case::non_text_scalar(Box::new(22u32), vec![])]
    #[case::null_reference(Box::new(None::<Person>), vec![])]
    fn walk_reports_leaves_in_order(#[case] input: Box<dyn Walk>, #[case] expected: Vec<&str>) {
        assert_eq!(walk_to_vec(&input), expected);
    }

    #[test]
    fn reference_matches_direct_walk() {
        let direct = person("Nuriddin", 33, "London");
        let referenced = Some(Box::new(person("Nuriddin", 33, "London")));

        assert_eq!(walk_to_vec(&referenced), walk_to_vec(&direct));
    }

    #[test]
    fn sequence_is_concatenation_of_elements() {
        let people = vec![
            person("Nuriddin", 22, "Tashkent"),
            person("Dilshod", 33, "London"),
        ];

        let mut expected = Vec::new();
        for p in &people {
            expected.extend(walk_to_vec(p));
        }

        assert_eq!(walk_to_vec(&people), expected);
    }

    #[test]
    fn mixed_nesting() {
        let value = (
            vec![Some(person("Nuriddin", 22, "Tashkent")), None],
            [Rc::new(profile(34, "Samarkand"))],
            "tail",
        );

        assert_eq!(
            walk_to_vec(&value),
            vec!["Nuriddin", "Tashkent", "Samarkand", "tail"]
        );
    }
}

mod unordered_shapes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_maps() {
        let mut map = HashMap::new();
        map.insert("Foo", "Bar");
        map.insert("Baz", "Boz");

        let got = walk_to_vec(&map);

        assert_eq!(got.len(), 2);
        assert!(got.contains(&"Bar".to_string()));
        assert!(got.contains(&"Boz".to_string()));
    }

    #[test]
    fn map_of_records() {
        let mut map = HashMap::new();
        map.insert(1, profile(33, "Berlin"));
        map.insert(2, profile(34, "Katowice"));

        let mut got = walk_to_vec(&map);
        got.sort();

        assert_eq!(got, vec!["Berlin", "Katowice"]);
    }
}

mod streams_and_producers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_channels() {
        let (tx, rx) = mpsc::channel();

        let producer = thread::spawn(move || {
            tx.send(profile(33, "Berlin")).unwrap();
            tx.send(profile(34, "Katowice")).unwrap();
        });

        let got = walk_to_vec(&rx);
        producer.join().unwrap();

        assert_eq!(got, vec!["Berlin", "Katowice"]);
    }

    #[test]
    fn with_crossbeam_channels() {
        let (tx, rx) = crossbeam_channel::bounded(1);

        let producer = thread::spawn(move || {
            for (age, city) in [(33, "Berlin"), (34, "Katowice"), (35, "London")] {
                tx.send(profile(age, city)).unwrap();
            }
        });

        let got = walk_to_vec(&rx);
        producer.join().unwrap();

        assert_eq!(got, vec!["Berlin", "Katowice", "London"]);
    }

    #[test]
    fn walk_returns_only_after_close() {
        let (tx, rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();

        let consumer = thread::spawn(move || {
            let got = walk_to_vec(&rx);
            done_tx.send(()).unwrap();
            got
        });

        tx.send("first".to_string()).unwrap();
        tx.send("second".to_string()).unwrap();
        // The walker is still blocked on the open stream.
        assert!(done_rx.try_recv().is_err());

        drop(tx);
        let got = consumer.join().unwrap();

        assert_eq!(got, vec!["first", "second"]);
        assert!(done_rx.try_recv().is_ok());
    }

    #[test]
    fn with_functions() {
        let producer = Producer(|| (profile(33, "Berlin"), profile(34, "London")));
        assert_eq!(walk_to_vec(&producer), vec!["Berlin", "London"]);
    }

    #[test]
    fn producer_results_keep_return_order() {
        let producer = Producer(|| (person("Nuriddin", 22, "Tashkent"), "after"));
        assert_eq!(
            walk_to_vec(&producer),
            vec!["Nuriddin", "Tashkent", "after"]
        );
    }
}

mod dynamic_values {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_array_matches_typed_sequence() {
        let typed = vec![profile(33, "London"), profile(34, "Tashkent")];
        let dynamic = json!([
            { "Age": 33, "City": "London" },
            { "Age": 34, "City": "Tashkent" }
        ]);

        assert_eq!(walk_to_vec(&dynamic), walk_to_vec(&typed));
    }

    #[test]
    fn json_null_contributes_nothing() {
        assert!(walk_to_vec(&json!(null)).is_empty());
        assert!(walk_to_vec(&json!([null, 1, false])).is_empty());
    }
}

mod limits {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn depth_limit_from_config() {
        init_tracing();
        let config = WalkConfig::from_json(r#"{ "max_depth": 2 }"#).unwrap();
        let walker = Walker::new(config);

        let err = walker
            .walk(&person("Nuriddin", 33, "London"), |_| {})
            .unwrap_err();

        assert!(matches!(err, WalkError::DepthLimitExceeded { limit: 2 }));
    }

    #[test]
    fn deeply_nested_json_within_default_limit() {
        let mut value = json_leaf();
        for _ in 0..100 {
            value = serde_json::Value::Array(vec![value]);
        }

        assert_eq!(collect_texts(&value).unwrap(), vec!["leaf"]);
    }

    fn json_leaf() -> serde_json::Value {
        serde_json::Value::String("leaf".into())
    }
}
