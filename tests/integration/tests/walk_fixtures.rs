//! End-to-end traversal tests over JSON-encoded schema ASTs.
//!
//! Each test decodes a fixture the way the CLI does and walks the result
//! through the public API only.

use std::cell::RefCell;
use std::path::PathBuf;

use protowalk_ast::{
    ElementContainer, Handler, MapField, NormalField, OneofField, Package, Proto, TryHandler,
    Visitee, VisiteeKind, Visitor, WalkContext, WalkError, check_cancelled, descendants,
    try_walk, try_with_service, walk, with_option, with_package, with_visitor,
};
use rstest::rstest;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(name: &str) -> Proto {
    let content = std::fs::read_to_string(fixtures_dir().join(name)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn describe(visitee: &Visitee) -> String {
    match visitee.name() {
        Some(name) => format!("{} {name}", visitee.kind()),
        None => visitee.kind().to_string(),
    }
}

fn walk_order<T: ElementContainer + ?Sized>(root: &T) -> Vec<String> {
    let order = RefCell::new(Vec::new());
    {
        let mut handlers: Vec<Handler<'_, ()>> = vec![Box::new(|_: &(), visitee: &Visitee| {
            order.borrow_mut().push(describe(visitee))
        })];
        walk(&(), root, &mut handlers);
    }
    order.into_inner()
}

mod traversal_order {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visits_every_element_in_pre_order() {
        let proto = load("greeter.json");
        assert_eq!(proto.filename, "greeter.proto");

        assert_eq!(
            walk_order(&proto),
            vec![
                "syntax",
                "package greeter",
                "import google/protobuf/empty.proto",
                "option java_multiple_files",
                "comment",
                "service Greeter",
                "rpc SayHello",
                "option deprecated",
                "rpc Chat",
                "message HelloRequest",
                "normal_field name",
                "message Meta",
                "map_field labels",
                "reserved",
                "extensions",
                "message HelloReply",
                "oneof body",
                "oneof_field text",
                "group Rich",
                "normal_field html",
                "enum Mood",
                "option allow_alias",
                "enum_field MOOD_UNKNOWN",
                "enum_field MOOD_HAPPY",
            ]
        );
    }

    #[test]
    fn iterator_agrees_with_walk() {
        let proto = load("greeter.json");
        let iterated: Vec<String> = descendants(&proto).map(|(_, v)| describe(v)).collect();
        assert_eq!(iterated, walk_order(&proto));
    }

    #[test]
    fn nested_container_walk_covers_only_its_subtree() {
        let proto = load("greeter.json");
        let reply = proto
            .elements
            .iter()
            .filter_map(Visitee::as_message)
            .find(|message| message.name == "HelloReply")
            .unwrap();

        assert_eq!(
            walk_order(reply),
            vec!["oneof body", "oneof_field text", "group Rich", "normal_field html"]
        );
    }

    #[test]
    fn handlers_run_in_list_order_for_each_element() {
        let proto = load("greeter.json");
        let calls = RefCell::new(Vec::new());
        {
            let mut handlers: Vec<Handler<'_, ()>> = vec![
                Box::new(|_: &(), v: &Visitee| calls.borrow_mut().push(('a', v.kind()))),
                Box::new(|_: &(), v: &Visitee| calls.borrow_mut().push(('b', v.kind()))),
            ];
            walk(&(), &proto, &mut handlers);
        }

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 48);
        for pair in calls.chunks(2) {
            assert_eq!(pair[0].0, 'a');
            assert_eq!(pair[1].0, 'b');
            assert_eq!(pair[0].1, pair[1].1);
        }
    }
}

mod typed_adapters {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_adapter_sees_options_at_every_level() {
        let proto = load("greeter.json");
        let names = RefCell::new(Vec::new());
        {
            let mut handlers: Vec<Handler<'_, ()>> =
                vec![with_option(|_, option| names.borrow_mut().push(option.name.clone()))];
            walk(&(), &proto, &mut handlers);
        }

        assert_eq!(
            names.into_inner(),
            vec!["java_multiple_files", "deprecated", "allow_alias"]
        );
    }

    #[test]
    fn package_adapter_receives_typed_package() {
        let proto = load("greeter.json");
        let packages = RefCell::new(Vec::new());
        {
            let mut handlers: Vec<Handler<'_, ()>> =
                vec![with_package(|_: &(), package: &Package| {
                    packages.borrow_mut().push(package.name.clone())
                })];
            walk(&(), &proto, &mut handlers);
        }

        assert_eq!(packages.into_inner(), vec!["greeter"]);
    }

    #[rstest]
    #[case::messages(VisiteeKind::Message, 3)]
    #[case::fields(VisiteeKind::NormalField, 2)]
    #[case::rpcs(VisiteeKind::Rpc, 2)]
    #[case::enum_values(VisiteeKind::EnumField, 2)]
    #[case::groups(VisiteeKind::Group, 1)]
    #[case::editions(VisiteeKind::Edition, 0)]
    fn counts_elements_by_kind(#[case] kind: VisiteeKind, #[case] expected: usize) {
        let proto = load("greeter.json");
        let count = descendants(&proto).filter(|(_, v)| v.kind() == kind).count();
        assert_eq!(count, expected);
    }
}

mod visitors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct PackageName(Option<String>);

    impl Visitor for PackageName {
        fn visit_package(&mut self, package: &Package) {
            self.0 = Some(package.name.clone());
        }
    }

    #[test]
    fn visitor_overrides_package_hook() {
        let proto = load("greeter.json");
        let mut package = PackageName::default();
        {
            let mut handlers: Vec<Handler<'_, ()>> = vec![with_visitor(&mut package)];
            walk(&(), &proto, &mut handlers);
        }

        assert_eq!(package.0.as_deref(), Some("greeter"));
    }

    #[derive(Default)]
    struct FieldNames(Vec<String>);

    impl Visitor for FieldNames {
        fn visit_normal_field(&mut self, field: &NormalField) {
            self.0.push(field.field.name.clone());
        }

        fn visit_map_field(&mut self, field: &MapField) {
            self.0.push(format!(
                "map<{}, {}> {}",
                field.key_type, field.field.type_name, field.field.name
            ));
        }

        fn visit_oneof_field(&mut self, field: &OneofField) {
            self.0.push(field.field.name.clone());
        }
    }

    #[test]
    fn visitor_collects_fields_across_messages() {
        let proto = load("greeter.json");
        let mut fields = FieldNames::default();
        {
            let mut handlers: Vec<Handler<'_, ()>> = vec![with_visitor(&mut fields)];
            walk(&(), &proto, &mut handlers);
        }

        assert_eq!(
            fields.0,
            vec!["name", "map<string, string> labels", "text", "html"]
        );
    }
}

mod early_exit {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn try_walk_stops_at_first_failing_handler() {
        let proto = load("greeter.json");
        let seen = RefCell::new(0usize);
        let result = {
            let mut handlers: Vec<TryHandler<'_, (), String>> = vec![
                Box::new(|_: &(), _: &Visitee| {
                    *seen.borrow_mut() += 1;
                    Ok(())
                }),
                try_with_service(|_, service| Err(format!("found service {}", service.name))),
            ];
            try_walk(&(), &proto, &mut handlers)
        };

        assert_eq!(result, Err("found service Greeter".to_string()));
        assert_eq!(seen.into_inner(), 6);
    }

    #[test]
    fn cancellation_from_a_handler_ends_the_walk() {
        let proto = load("greeter.json");
        let ctx = WalkContext::new();
        let seen = RefCell::new(Vec::new());
        let result = {
            let mut handlers: Vec<TryHandler<'_, WalkContext, WalkError>> = vec![
                check_cancelled(),
                Box::new(|ctx: &WalkContext, visitee: &Visitee| {
                    seen.borrow_mut().push(visitee.kind());
                    if visitee.kind() == VisiteeKind::Rpc {
                        ctx.cancel();
                    }
                    Ok(())
                }),
            ];
            try_walk(&ctx, &proto, &mut handlers)
        };

        assert_eq!(result, Err(WalkError::Cancelled));
        assert_eq!(seen.into_inner().last(), Some(&VisiteeKind::Rpc));
        assert!(ctx.is_cancelled());
    }
}

mod encoding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decoded_tree_survives_reencoding() {
        let proto = load("greeter.json");
        let value = serde_json::to_value(&proto).unwrap();
        let decoded: Proto = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, proto);
    }
}
