//! End-to-end discovery over real test directories.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use testmap_js::testmap_core::{DeclarationKind, DiscoveryError, ExtendedNode, Inventory, LoadError, SimpleNode};
use testmap_js::{DiscoveryOptions, Interface, find_suites_and_tests_with};

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn options_in(cwd: impl Into<PathBuf>) -> DiscoveryOptions {
    DiscoveryOptions {
        cwd: Some(cwd.into()),
        ..DiscoveryOptions::default()
    }
}

fn extended<'t>(inventory: &'t Inventory, path: &[&str]) -> &'t ExtendedNode {
    let (last, parents) = path.split_last().unwrap();
    let mut tree = &inventory.extended_tree;
    for segment in parents {
        tree = tree[*segment].children.as_ref().unwrap();
    }
    &tree[*last]
}

async fn example_js() -> Inventory {
    let options = DiscoveryOptions {
        extensions: "js".into(),
        ..options_in(manifest_dir())
    };
    find_suites_and_tests_with("tests/fixtures/mocha", &options)
        .await
        .unwrap()
}

#[tokio::test]
async fn lists_suites_and_tests_of_commonjs_example() {
    let inventory = example_js().await;

    assert_eq!(
        inventory.suites,
        [
            "suite-1",
            "suite-2",
            "suite-2.suite-2.1",
            "suite-3",
            "suite-4",
            "suite-4.suite-4.1",
            "suite-5",
            "suite-5.suite-5.2",
        ]
    );
    assert_eq!(
        inventory.tests,
        [
            "test-0",
            "suite-1.test-1",
            "suite-2.suite-2.1.test-2.1.1",
            "suite-3.test-3.1",
            "suite-4.suite-4.1.test-4.1.1",
            "suite-5.test-5.1",
            "suite-5.suite-5.2.test-5.2.1",
        ]
    );
}

#[tokio::test]
async fn records_kinds_and_source_lines() {
    let inventory = example_js().await;
    let file = "tests/fixtures/mocha/example.js";

    let test_0 = extended(&inventory, &["test-0"]);
    assert_eq!(test_0.kind, DeclarationKind::Test);
    assert_eq!(test_0.source_file, file);
    assert_eq!(test_0.source_line, 3);

    let nested = extended(&inventory, &["suite-2", "suite-2.1", "test-2.1.1"]);
    assert_eq!(nested.source_line, 15);

    let hooks: Vec<_> = inventory.extended_tree["suite-3"]
        .children
        .as_ref()
        .unwrap()
        .iter()
        .map(|(name, node)| (name.as_str(), node.kind, node.source_line))
        .collect();
    assert_eq!(
        hooks,
        [
            (":before", DeclarationKind::Before, 22),
            (":after", DeclarationKind::After, 23),
            (":beforeEach", DeclarationKind::BeforeEach, 25),
            (":afterEach", DeclarationKind::AfterEach, 26),
            ("test-3.1", DeclarationKind::Test, 28),
        ]
    );

    assert_eq!(extended(&inventory, &["suite-5", "test-5.1"]).kind, DeclarationKind::TestSkip);
    assert_eq!(extended(&inventory, &["suite-5", "suite-5.2"]).kind, DeclarationKind::SuiteSkip);
    assert_eq!(
        extended(&inventory, &["suite-5", "suite-5.2", "test-5.2.1"]).kind,
        DeclarationKind::Test
    );
}

#[tokio::test]
async fn simple_tree_projects_locations() {
    let inventory = example_js().await;

    match &inventory.tree["test-0"] {
        SimpleNode::Location(location) => assert_eq!(location, "tests/fixtures/mocha/example.js:3"),
        other => panic!("expected a location, got {other:?}"),
    }
    let SimpleNode::Branch(suite_1) = &inventory.tree["suite-1"] else {
        panic!("suite-1 should be a branch");
    };
    assert!(matches!(&suite_1["test-1"], SimpleNode::Location(l) if l.ends_with("example.js:8")));

    let json = serde_json::to_value(&inventory).unwrap();
    assert!(json.get("extendedTree").is_some());
    assert_eq!(json["tree"]["suite-3"][":before"], "tests/fixtures/mocha/example.js:22");
}

#[tokio::test]
async fn es_modules_load_alongside_scripts() {
    let inventory = find_suites_and_tests_with("tests/fixtures/mocha", &options_in(manifest_dir()))
        .await
        .unwrap();

    // Files load in name order: es6module.mjs, example.js, example.mjs.
    assert_eq!(inventory.tests.first().map(String::as_str), Some("test-0"));
    assert!(inventory.tests.iter().any(|t| t == "mtest-0"));
    assert!(inventory.suites.iter().any(|s| s == "msuite-4.msuite-4.1"));

    let mtest = extended(&inventory, &["mtest-0"]);
    assert_eq!(mtest.source_file, "tests/fixtures/mocha/example.mjs");
    assert_eq!(mtest.source_line, 4);
}

#[tokio::test]
async fn repeated_runs_are_isolated() {
    let options = options_in(manifest_dir());
    let first = find_suites_and_tests_with("tests/fixtures/mocha", &options)
        .await
        .unwrap();
    let second = find_suites_and_tests_with("tests/fixtures/mocha", &options)
        .await
        .unwrap();

    assert_eq!(first, second);
    let unique: HashSet<&String> = second.tests.iter().collect();
    assert_eq!(unique.len(), second.tests.len());
    assert_eq!(second.tests.iter().filter(|t| *t == "test-0").count(), 1);
    assert_eq!(second.suites.iter().filter(|s| *s == "suite-1").count(), 1);
}

#[tokio::test]
async fn declarations_merge_across_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("test");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.js"), "describe('shared', () => { it('one', () => {}); });\n").unwrap();
    fs::write(dir.join("b.js"), "describe('shared', () => { it('two', () => {}); });\n").unwrap();

    let inventory = find_suites_and_tests_with("test", &options_in(temp.path()))
        .await
        .unwrap();

    assert_eq!(inventory.suites, ["shared"]);
    assert_eq!(inventory.tests, ["shared.one", "shared.two"]);
    // The last declaration wins the suite's provenance.
    assert_eq!(extended(&inventory, &["shared"]).source_file, "test/b.js");
}

#[tokio::test]
async fn tdd_interface_is_opt_in() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tdd.js"),
        "suite('math', function () {\n  setup(function () {});\n  test('adds', function () {});\n});\n",
    )
    .unwrap();

    let bdd = find_suites_and_tests_with("tdd.js", &options_in(temp.path()))
        .await
        .unwrap();
    assert!(bdd.tests.is_empty());

    let options = DiscoveryOptions {
        interface: Interface::Tdd,
        ..options_in(temp.path())
    };
    let tdd = find_suites_and_tests_with("tdd.js", &options).await.unwrap();
    assert_eq!(tdd.tests, ["math.adds"]);
    assert_eq!(extended(&tdd, &["math", ":beforeEach"]).source_line, 2);
}

#[tokio::test]
async fn missing_root_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = find_suites_and_tests_with("nowhere", &options_in(temp.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::PathResolution(_)));
    assert!(err.to_string().starts_with("cannot resolve path (or pattern)"));
}

#[tokio::test]
async fn thrown_error_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("test");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.js"), "describe('a', () => {\n  throw new Error('setup failed');\n});\n").unwrap();
    fs::write(dir.join("b.js"), "it('b', () => {});\n").unwrap();

    let err = find_suites_and_tests_with("test", &options_in(temp.path()))
        .await
        .unwrap_err();
    match err {
        DiscoveryError::Load {
            source: LoadError::Thrown { location, message },
            ..
        } => {
            assert_eq!(message, "setup failed");
            assert_eq!(location.to_string(), "test/a.js:2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn syntax_errors_name_the_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.js"), "describe('x', () => {\n").unwrap();

    let err = find_suites_and_tests_with("bad.js", &options_in(temp.path()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DiscoveryError::Load {
            source: LoadError::Syntax { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn self_referential_bindings_fall_back_to_source_text() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("test");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.js"), "var title = title + '!';\nit(title, () => {});\n").unwrap();
    fs::write(dir.join("b.js"), "var a = b;\nvar b = a;\nit(a, () => {});\n").unwrap();

    let inventory = find_suites_and_tests_with("test", &options_in(temp.path()))
        .await
        .unwrap();
    assert_eq!(inventory.tests, ["title", "a"]);
}

#[tokio::test]
async fn tests_declared_in_loops_are_listed() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("test");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("loops.js"),
        "['a', 'b'].forEach((n) => { it(n, () => {}); });\nfor (const n of ['c']) { it(n, () => {}); }\n",
    )
    .unwrap();

    let inventory = find_suites_and_tests_with("test", &options_in(temp.path()))
        .await
        .unwrap();
    assert_eq!(inventory.tests, ["a", "b", "c"]);
    assert_eq!(extended(&inventory, &["c"]).source_line, 2);
}
