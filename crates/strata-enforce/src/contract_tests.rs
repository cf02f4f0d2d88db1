use super::*;
use strata_core::trace::RecordingObserver;
use strata_graph::ImportGraph;

fn graph(edges: &[(&str, &str)]) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for (importer, imported) in edges {
        graph.add_import(importer, imported);
    }
    graph
}

fn layers(names: &[&str]) -> Vec<Layer> {
    names.iter().map(|name| Layer::new(*name)).collect()
}

fn packages(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_no_cross_layer_imports_is_kept() {
    let graph = graph(&[
        ("app.high", "app.mid"),
        ("app.mid", "app.low"),
        ("app.high", "app.low"),
    ]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "mid", "high"]));
    contract.check_dependencies(&graph);
    assert!(contract.is_kept());
    assert!(contract.illegal_dependencies().is_empty());
}

#[test]
fn test_direct_violation_records_importer_and_imported() {
    // The spec'd scenario: app.low imports app.high directly and nothing
    // else crosses layers.
    let graph = graph(&[("app.low", "app.high")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "mid", "high"]));
    contract.check_dependencies(&graph);

    assert!(!contract.is_kept());
    let illegal = contract.illegal_dependencies();
    assert_eq!(illegal.len(), 1);
    assert_eq!(illegal[0].modules(), &["app.low", "app.high"]);
    assert_eq!(illegal[0].importer(), Some("app.low"));
    assert_eq!(illegal[0].imported(), Some("app.high"));
}

#[test]
fn test_single_layer_contract_is_always_kept() {
    let graph = graph(&[("app.only", "app.other"), ("app.other", "app.only")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["only"]));
    contract.check_dependencies(&graph);
    assert!(contract.is_kept());
}

#[test]
fn test_empty_layer_stack_is_always_kept() {
    let graph = graph(&[("app.a", "app.b")]);
    let mut contract = Contract::new("c", packages(&["app"]), vec![]);
    contract.check_dependencies(&graph);
    assert!(contract.is_kept());
}

#[test]
fn test_violation_from_descendant_of_checked_layer() {
    // Descendants of the checked layer count as that layer, any depth.
    let graph = graph(&[("app.low", "app.high.views.admin")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    contract.check_dependencies(&graph);

    assert!(!contract.is_kept());
    assert_eq!(
        contract.illegal_dependencies()[0].modules(),
        &["app.low", "app.high.views.admin"],
    );
}

#[test]
fn test_whitelisting_offending_edge_removes_violation() {
    let edges = [("app.low", "app.high")];

    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    contract.check_dependencies(&graph(&edges));
    assert!(!contract.is_kept());

    let mut whitelisted = Contract::new("c", packages(&["app"]), layers(&["low", "high"]))
        .with_whitelisted_paths([ImportPath::new("app.low", "app.high")]);
    whitelisted.check_dependencies(&graph(&edges));
    assert!(whitelisted.is_kept());
}

#[test]
fn test_whitelisting_only_route_removes_transitive_violation() {
    // app.low reaches app.high only through app.utils; accepting the first
    // hop leaves no path to find.
    let edges = [("app.low", "app.utils"), ("app.utils", "app.high")];

    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]))
        .with_whitelisted_paths([ImportPath::new("app.low", "app.utils")]);
    contract.check_dependencies(&graph(&edges));
    assert!(contract.is_kept());
}

#[test]
fn test_path_via_another_layer_attributed_to_that_layer() {
    let graph = graph(&[("app.low", "app.mid"), ("app.mid", "app.high")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "mid", "high"]));
    let mut observer = RecordingObserver::new();
    contract.check_dependencies_with(&graph, &mut observer);

    // The low -> mid -> high chain is not reported at the high layer; the
    // two direct hops are each reported at their own layer.
    let illegal = contract.illegal_dependencies();
    assert_eq!(illegal.len(), 2);
    assert!(illegal.contains(&DependencyPath::from(vec!["app.mid", "app.high"])));
    assert!(illegal.contains(&DependencyPath::from(vec!["app.low", "app.mid"])));

    let skipped: Vec<_> = observer
        .events()
        .iter()
        .filter_map(|event| match event {
            CheckEvent::PathSkippedViaLayer { via, path, .. } => Some((via.clone(), path.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, "app.mid");
    assert_eq!(
        skipped[0].1.modules(),
        &["app.low", "app.mid", "app.high"],
    );
}

#[test]
fn test_interior_non_layer_module_does_not_suppress() {
    // Routing through an ordinary helper module is still this layer's
    // violation.
    let graph = graph(&[("app.low", "app.shared"), ("app.shared", "app.high")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    contract.check_dependencies(&graph);

    assert!(!contract.is_kept());
    assert_eq!(
        contract.illegal_dependencies()[0].modules(),
        &["app.low", "app.shared", "app.high"],
    );
}

#[test]
fn test_layers_processed_highest_first() {
    let graph = graph(&[]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["data", "domain", "api"]));
    let mut observer = RecordingObserver::new();
    contract.check_dependencies_with(&graph, &mut observer);

    let checked: Vec<_> = observer
        .events()
        .iter()
        .filter_map(|event| match event {
            CheckEvent::LayerChecked { layer, .. } => Some(layer.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(checked, vec!["api", "domain", "data"]);
}

#[test]
fn test_every_package_checked_independently() {
    let graph = graph(&[("app.low", "app.high"), ("lib.low", "lib.high")]);
    let mut contract = Contract::new("c", packages(&["app", "lib"]), layers(&["low", "high"]));
    contract.check_dependencies(&graph);

    let illegal = contract.illegal_dependencies();
    assert_eq!(illegal.len(), 2);
    assert!(illegal.contains(&DependencyPath::from(vec!["app.low", "app.high"])));
    assert!(illegal.contains(&DependencyPath::from(vec!["lib.low", "lib.high"])));
}

#[test]
fn test_default_contract_misses_submodule_importer() {
    // Only layer roots are probed downstream by default.
    let graph = graph(&[("app.low.helpers", "app.high")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    contract.check_dependencies(&graph);
    assert!(contract.is_kept());
}

#[test]
fn test_recursive_contract_sees_submodule_importers() {
    let graph = graph(&[("app.low.helpers", "app.high")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]))
        .with_recursive(true);
    contract.check_dependencies(&graph);

    assert!(!contract.is_kept());
    assert_eq!(
        contract.illegal_dependencies()[0].modules(),
        &["app.low.helpers", "app.high"],
    );
}

#[test]
fn test_rechecking_is_deterministic_and_overwrites() {
    let graph = graph(&[("app.low", "app.high"), ("app.low", "app.mid")]);
    let mut contract = Contract::new("c", packages(&["app"]), layers(&["low", "mid", "high"]));

    contract.check_dependencies(&graph);
    let first: Vec<DependencyPath> = contract.illegal_dependencies().to_vec();

    contract.check_dependencies(&graph);
    let second: Vec<DependencyPath> = contract.illegal_dependencies().to_vec();

    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "cannot query results until check_dependencies is called")]
fn test_is_kept_before_check_panics() {
    let contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    let _ = contract.is_kept();
}

#[test]
fn test_outcome_is_none_before_check() {
    let contract = Contract::new("c", packages(&["app"]), layers(&["low", "high"]));
    assert!(contract.outcome().is_none());
}

#[test]
fn test_from_definition_carries_everything_over() {
    let definition = strata_core::config::validate(
        "web".to_string(),
        strata_core::config::ContractConfig {
            packages: vec!["app".to_string()],
            layers: vec!["low".to_string(), "high".to_string()],
            whitelisted_paths: vec!["app.low <- app.high".to_string()],
            recursive: true,
        },
    )
    .unwrap();

    let contract = Contract::from(definition);
    assert_eq!(contract.name(), "web");
    assert_eq!(contract.packages(), &["app"]);
    assert_eq!(contract.layers().len(), 2);
    assert!(contract
        .whitelisted_paths()
        .contains(&ImportPath::new("app.low", "app.high")));
    assert!(contract.recursive());
    assert!(contract.outcome().is_none());
}
