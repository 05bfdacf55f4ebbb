use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let plan = env.run_json(&["plan"]);
    assert_eq!(plan["ok"], true);
    validate("plan.schema.json", &plan["data"]);

    let append = env.run_json(&["append", "fixture.ts", "--reps", "2"]);
    assert_eq!(append["ok"], true);
    validate("append.schema.json", &append["data"]);

    let missing = env.run_json(&["append", "missing/fixture.ts", "--reps", "2"]);
    assert_eq!(missing["ok"], true);
    validate("append.schema.json", &missing["data"]);

    let check = env.run_json(&["check", "fixture.ts"]);
    assert_eq!(check["ok"], true);
    validate("check.schema.json", &check["data"]);

    let generate = env.run_json(&["generate", "--preset", "1mb"]);
    assert_eq!(generate["ok"], true);
    validate("generate.schema.json", &generate["data"]);
}
