//! Property tests for identifier safety and statement accumulation.

use proptest::prelude::*;
use serde_json::{Map, Value};
use sqlchain::prelude::*;
use sqlchain::{extract_names, is_safe_name};

#[derive(Debug, Clone)]
enum Step {
    SelectFrom(String),
    Select(String),
    Where(String),
    Eq(String),
    Join(String, String),
    Open,
    Close,
    And,
    Raw(String),
}

fn step() -> impl Strategy<Value = Step> {
    let name = "[ -~]{0,12}";
    prop_oneof![
        name.prop_map(Step::SelectFrom),
        name.prop_map(Step::Select),
        name.prop_map(Step::Where),
        name.prop_map(Step::Eq),
        (name, name).prop_map(|(a, b)| Step::Join(a, b)),
        Just(Step::Open),
        Just(Step::Close),
        Just(Step::And),
        name.prop_map(Step::Raw),
    ]
}

fn apply(q: &mut Statement, step: &Step) {
    // Errors are expected for unsafe names; only the text matters here.
    let _ = match step {
        Step::SelectFrom(t) => q.select_from(t.as_str()).map(|_| ()),
        Step::Select(c) => q.select(c.as_str()).map(|_| ()),
        Step::Where(w) => {
            q.where_(w);
            Ok(())
        }
        Step::Eq(c) => q.eq(c.as_str(), Joiner::And).map(|_| ()),
        Step::Join(a, b) => q.join([a.as_str(), b.as_str()]).map(|_| ()),
        Step::Open => {
            q.open();
            Ok(())
        }
        Step::Close => {
            q.close();
            Ok(())
        }
        Step::And => {
            q.and();
            Ok(())
        }
        Step::Raw(r) => {
            q.raw(r);
            Ok(())
        }
    };
}

proptest! {
    #[test]
    fn word_names_always_pass(name in "[A-Za-z0-9_]{1,24}", unchecked in any::<bool>()) {
        prop_assert!(is_safe_name(&name));
        let cfg = BuilderConfig::new().safe_by_default(unchecked);
        let mut q = statement_with_config("", cfg);
        prop_assert!(q.select(name.as_str()).is_ok());
        prop_assert!(q.from(vec![name.clone()]).is_ok());
    }

    #[test]
    fn punctuated_names_need_bypass(
        head in "[a-z]{0,6}",
        bad in "[ ;'\"()]",
        tail in "[a-z]{0,6}",
    ) {
        let name = format!("{head}{bad}{tail}");
        prop_assert!(!is_safe_name(&name));

        let mut q = statement("");
        let err = q.select(vec![name.clone()]).unwrap_err();
        prop_assert!(err.is_unsafe_identifier());

        prop_assert!(q.select(Trusted(vec![name.clone()])).is_ok());

        let mut q = statement_with_config("", BuilderConfig::new().safe_by_default(true));
        prop_assert!(q.select(vec![name]).is_ok());
    }

    #[test]
    fn text_only_grows(steps in prop::collection::vec(step(), 0..24)) {
        let mut q = statement("");
        let mut prev = q.to_sql();
        for s in &steps {
            apply(&mut q, s);
            let now = q.to_sql();
            prop_assert!(now.len() >= prev.len());
            prop_assert!(now.starts_with(&prev));
            prev = now;
        }
    }

    #[test]
    fn read_is_idempotent(steps in prop::collection::vec(step(), 0..12)) {
        let mut q = statement("");
        for s in &steps {
            apply(&mut q, s);
        }
        let first = q.ok().to_string();
        prop_assert_eq!(q.ok(), first.as_str());
        prop_assert_eq!(q.end(), first.as_str());
    }

    #[test]
    fn shapes_reduce_to_same_names(
        names in prop::collection::btree_set("[a-z_][a-z0-9_]{0,8}", 1..6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let keyed: Map<String, Value> = names
            .iter()
            .map(|n| (n.clone(), Value::Bool(true)))
            .collect();

        let from_seq = extract_names(names.clone()).unwrap();
        let from_map = extract_names(keyed).unwrap();
        let from_str = extract_names(names.join(" , ")).unwrap();

        prop_assert_eq!(&from_seq, &names);
        prop_assert_eq!(&from_map, &names);
        prop_assert_eq!(&from_str, &names);
    }
}

#[test]
fn public_api_round() {
    let mut q = statement("");
    q.select(["id", "email"])
        .unwrap()
        .from("users")
        .unwrap()
        .where_("")
        .eq("status", Joiner::And)
        .unwrap()
        .and()
        .gt("age", Joiner::And)
        .unwrap()
        .limit("10");
    let text: Vec<&str> = q.ok().split_whitespace().collect();
    assert_eq!(
        text.join(" "),
        "SELECT id, email FROM users WHERE (status = :status) AND (age > :age) LIMIT 10"
    );
}

#[test]
fn errors_are_sql_errors() {
    let mut q = Statement::empty();
    let err: SqlError = q.update("users; --").unwrap_err();
    assert!(err.is_unsafe_identifier());
}
