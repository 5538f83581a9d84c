//! Schema inference tests

use super::*;
use crate::collaborators::{DependencyLog, MediaTypeGuesser, MS_DOWNLOAD};
use crate::config::InferenceConfig;
use crate::error::Error;
use crate::types::{ExamplePolicy, JsonObject, JsonValue};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn obj(value: JsonValue) -> JsonObject {
    value.as_object().cloned().expect("test value should be an object")
}

fn records(values: Vec<JsonValue>) -> Vec<JsonObject> {
    values.into_iter().map(obj).collect()
}

fn no_args() -> ResolveArgs {
    ResolveArgs::new()
}

struct FixedGuesser(&'static str);

impl MediaTypeGuesser for FixedGuesser {
    fn guess(&self, _path: &str) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Example Extraction Tests
// ============================================================================

#[test]
fn test_extract_covers_every_key() {
    let recs = records(vec![
        json!({"type": "Post", "a": 1}),
        json!({"type": "Post", "b": "x"}),
    ]);
    let examples = ExampleExtractor::default().extract(&recs, None);

    assert!(examples.contains_key("a"));
    assert!(examples.contains_key("b"));
    assert!(examples.contains_key("type"));
}

#[test]
fn test_extract_policies() {
    let recs = records(vec![json!({"a": 1}), json!({"a": "x"})]);

    let last = ExampleExtractor::new(ExamplePolicy::LastSeen).extract(&recs, None);
    assert_eq!(last["a"], json!("x"));

    let first = ExampleExtractor::new(ExamplePolicy::FirstSeen).extract(&recs, None);
    assert_eq!(first["a"], json!(1));
}

#[test]
fn test_extract_keeps_populated_arrays() {
    let recs = records(vec![json!({"tags": ["a"]}), json!({"tags": []})]);
    let examples = ExampleExtractor::default().extract(&recs, None);
    assert_eq!(examples["tags"], json!(["a"]));
}

#[test]
fn test_extract_merges_array_objects() {
    let recs = records(vec![json!({"items": [{"a": 1}, {"b": "x"}]})]);
    let examples = ExampleExtractor::default().extract(&recs, None);
    assert_eq!(examples["items"], json!([{"a": 1, "b": "x"}]));
}

#[test]
fn test_extract_deep_merges_objects() {
    let recs = records(vec![
        json!({"meta": {"title": "One"}}),
        json!({"meta": {"tags": ["x"]}}),
    ]);
    let examples = ExampleExtractor::default().extract(&recs, None);
    assert_eq!(examples["meta"], json!({"title": "One", "tags": ["x"]}));
}

#[test]
fn test_extract_with_selector_flattens_arrays() {
    let recs = records(vec![
        json!({"items": [{"a": 1}]}),
        json!({"items": [{"b": true}]}),
        json!({"other": 1}),
    ]);
    let examples = ExampleExtractor::default().extract(&recs, Some("items"));
    assert_eq!(JsonValue::Object(examples), json!({"a": 1, "b": true}));
}

// ============================================================================
// Structural Classification Tests
// ============================================================================

#[test]
fn test_infer_scalars() {
    let recs = records(vec![json!({
        "type": "Post",
        "title": "Hello",
        "count": 3,
        "ratio": 0.5,
        "whole": 2.0,
        "draft": false
    })]);
    let fields = infer_fields(&recs, None, &[]);

    assert_eq!(fields["title"], FieldDescriptor::scalar(ScalarType::String));
    assert_eq!(fields["count"], FieldDescriptor::scalar(ScalarType::Int));
    assert_eq!(fields["ratio"], FieldDescriptor::scalar(ScalarType::Float));
    assert_eq!(fields["whole"], FieldDescriptor::scalar(ScalarType::Int));
    assert_eq!(fields["draft"], FieldDescriptor::scalar(ScalarType::Boolean));
}

#[test]
fn test_reserved_fields_are_skipped() {
    let recs = records(vec![json!({
        "type": "Post",
        "id": "p1",
        "parent": "root",
        "children": [],
        "title": "Hello"
    })]);
    let fields = infer_fields(&recs, None, &[]);
    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["title"]);
}

#[test]
fn test_nulls_and_empty_values_are_dropped() {
    let recs = records(vec![json!({
        "type": "Post",
        "subtitle": null,
        "tags": [],
        "meta": {}
    })]);
    let fields = infer_fields(&recs, None, &[]);
    assert!(fields.is_empty());
}

#[test]
fn test_date_strings() {
    let recs = records(vec![json!({
        "type": "Post",
        "date": "2021-03-01",
        "slug": "2021-03-01-extra"
    })]);
    let fields = infer_fields(&recs, None, &[]);

    assert_eq!(fields["date"], date_field());
    assert!(fields["date"].arg("formatString").is_some());
    assert_eq!(fields["slug"], FieldDescriptor::scalar(ScalarType::String));
}

#[test]
fn test_list_of_objects() {
    let recs = records(vec![json!({"type": "Post", "items": [{"a": 1, "b": "x"}]})]);
    let fields = infer_fields(&recs, None, &[]);

    let items = &fields["items"].field_type;
    assert!(items.is_list());
    let object = items.object_type().expect("list of objects");
    assert_eq!(object.name, "items");
    assert_eq!(
        object.field("a").map(|f| &f.field_type),
        Some(&FieldType::Scalar(ScalarType::Int))
    );
    assert_eq!(
        object.field("b").map(|f| &f.field_type),
        Some(&FieldType::Scalar(ScalarType::String))
    );
}

#[test]
fn test_list_of_scalars() {
    let recs = records(vec![json!({
        "type": "Post",
        "tags": ["a", "b"],
        "dates": ["2021-03-01"],
        "title_like": "x"
    })]);
    let fields = infer_fields(&recs, None, &[]);

    assert_eq!(fields["tags"].field_type.to_string(), "[String]");
    assert_eq!(
        fields["tags"].field_type.item_type(),
        Some(&FieldType::Scalar(ScalarType::String))
    );
    assert_eq!(fields["title_like"].field_type.item_type(), None);
    assert_eq!(fields["dates"].field_type.to_string(), "[String]");
    assert!(fields["dates"].args.is_empty());
}

#[test]
fn test_nested_object_fields_from_all_records() {
    let recs = records(vec![
        json!({"type": "Post", "frontmatter": {"title": "One"}}),
        json!({"type": "Post", "frontmatter": {"rating": 4}}),
    ]);
    let fields = infer_fields(&recs, None, &[]);

    let object = fields["frontmatter"].field_type.object_type().unwrap();
    assert_eq!(object.name, "frontmatter");
    assert_eq!(object.field_names(), vec!["rating", "title"]);
}

#[test]
fn test_inference_is_idempotent() {
    let recs = records(vec![json!({
        "type": "Post",
        "title": "Hello",
        "date": "2021-03-01",
        "items": [{"a": 1}]
    })]);
    let inferrer = SchemaInferrer::new(Arc::new(recs.clone()));

    let first = inferrer.infer_fields(&recs, None, &[]);
    let second = inferrer.infer_fields(&recs, None, &[]);
    assert_eq!(first, second);
}

#[test]
fn test_keys_are_sanitized() {
    let recs = records(vec![json!({"type": "Post", "cover-image": "large"})]);
    let fields = infer_fields(&recs, None, &[]);

    let field = &fields["cover_image"];
    assert_eq!(field.source.as_deref(), Some("cover-image"));

    let value = field.resolve(&recs[0], "cover_image", &no_args(), &ResolveContext::new());
    assert_eq!(value, Some(json!("large")));
}

#[test]
fn test_sanitized_key_collision_keeps_both_fields() {
    let recs = records(vec![json!({"type": "Post", "a-b": 1, "a_b": "x"})]);
    let fields = infer_fields(&recs, None, &[]);

    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["a_b", "a_b_2"]);
    assert_eq!(fields["a_b"], FieldDescriptor::scalar(ScalarType::String));
    assert_eq!(
        fields["a_b_2"],
        FieldDescriptor::scalar(ScalarType::Int).with_source("a-b")
    );

    let ctx = ResolveContext::new();
    assert_eq!(fields["a_b"].resolve(&recs[0], "a_b", &no_args(), &ctx), Some(json!("x")));
    assert_eq!(fields["a_b_2"].resolve(&recs[0], "a_b_2", &no_args(), &ctx), Some(json!(1)));
}

#[test]
fn test_link_base_name_yields_to_plain_field() {
    let recs = records(vec![
        json!({"type": "Author", "id": "a1", "name": "Jo"}),
        json!({"type": "Post", "id": "p1", "author": "Jo", "author___NODE": "a1"}),
    ]);
    let schema = build_schema(recs).unwrap();
    let post = schema.object_type("Post").unwrap();

    assert_eq!(post.field("author").unwrap().field_type.to_string(), "String");
    let link = post.field("author_2").unwrap();
    assert_eq!(link.field_type.to_string(), "Author");
    assert_eq!(link.source.as_deref(), Some("author___NODE"));
}

#[test]
fn test_inferrer_example_policy() {
    let inferrer = SchemaInferrer::new(Arc::new(Vec::new()));
    assert_eq!(inferrer.extractor().policy(), ExamplePolicy::LastSeen);

    let inferrer = inferrer.with_example_policy(ExamplePolicy::FirstSeen);
    assert_eq!(inferrer.extractor().policy(), ExamplePolicy::FirstSeen);

    let config = InferenceConfig::new().with_example_policy(ExamplePolicy::LastSeen);
    let inferrer = inferrer.with_config(&config);
    assert_eq!(inferrer.extractor().policy(), ExamplePolicy::LastSeen);

    let recs = records(vec![
        json!({"type": "Post", "rating": 4}),
        json!({"type": "Post", "rating": 4.5}),
    ]);
    let first = SchemaInferrer::new(Arc::new(recs.clone()))
        .with_example_policy(ExamplePolicy::FirstSeen)
        .infer_fields(&recs, None, &[]);
    assert_eq!(first["rating"], FieldDescriptor::scalar(ScalarType::Int));
    let last = infer_fields(&recs, None, &[]);
    assert_eq!(last["rating"], FieldDescriptor::scalar(ScalarType::Float));
}

// ============================================================================
// Date Resolver Tests
// ============================================================================

#[test]
fn test_date_resolver_arguments() {
    let record = obj(json!({"type": "Post", "date": "2021-03-01"}));
    let field = date_field();
    let ctx = ResolveContext::new().with_now(Utc.with_ymd_and_hms(2021, 3, 4, 0, 0, 0).unwrap());

    let formatted = field.resolve(
        &record,
        "date",
        &obj(json!({"formatString": "YYYY/MM/DD"})),
        &ctx,
    );
    assert_eq!(formatted, Some(json!("2021/03/01")));

    let relative = field.resolve(&record, "date", &obj(json!({"fromNow": true})), &ctx);
    assert_eq!(relative, Some(json!("3 days ago")));

    let diff = field.resolve(&record, "date", &obj(json!({"difference": "days"})), &ctx);
    assert_eq!(diff, Some(json!(3)));

    let raw = field.resolve(&record, "date", &no_args(), &ctx);
    assert_eq!(raw, Some(json!("2021-03-01")));
}

#[test]
fn test_date_resolver_passes_through_unparseable_values() {
    let record = obj(json!({"date": "someday"}));
    let value = date_field().resolve(
        &record,
        "date",
        &obj(json!({"formatString": "YYYY"})),
        &ResolveContext::new(),
    );
    assert_eq!(value, Some(json!("someday")));
}

// ============================================================================
// Cross-Reference Tests
// ============================================================================

fn authors_and_posts() -> Vec<JsonObject> {
    records(vec![
        json!({"type": "Author", "id": "a1", "name": "Jo"}),
        json!({"type": "Author", "id": "a2", "name": "Sam"}),
        json!({"type": "Post", "id": "p1", "title": "Hello", "author": "a1", "editors": ["a2", "a9"]}),
        json!({"type": "Post", "id": "p2", "title": "Again"}),
    ])
}

#[test]
fn test_mapping_overrides_structural_type() {
    let plain = build_schema(authors_and_posts()).unwrap();
    let post = plain.object_type("Post").unwrap();
    assert_eq!(post.field("author").unwrap().field_type.to_string(), "String");

    let config = InferenceConfig::new()
        .with_mapping("Post.author", "Author")
        .with_mapping("Post.editors", "Author");
    let schema = SchemaBuilder::new().with_config(config).build(authors_and_posts()).unwrap();
    let post = schema.object_type("Post").unwrap();

    assert_eq!(post.field("author").unwrap().field_type.to_string(), "Author");
    assert_eq!(post.field("editors").unwrap().field_type.to_string(), "[Author]");
}

#[test]
fn test_mapped_resolver_records_dependencies() {
    let log = Arc::new(DependencyLog::new());
    let config = InferenceConfig::new()
        .with_mapping("Post.author", "Author")
        .with_mapping("Post.editors", "Author");
    let schema = SchemaBuilder::new()
        .with_config(config)
        .with_recorder(log.clone())
        .build(authors_and_posts())
        .unwrap();

    let post = schema.find_record("Post", "p1").unwrap().clone();
    let ctx = ResolveContext::new().with_path("/blog/hello");

    let author = schema.resolve("Post", &post, "author", &no_args(), &ctx).unwrap();
    assert_eq!(author.unwrap()["name"], json!("Jo"));

    let editors = schema.resolve("Post", &post, "editors", &no_args(), &ctx).unwrap();
    let editors = editors.unwrap();
    assert_eq!(editors[0]["name"], json!("Sam"));
    assert_eq!(editors[1], JsonValue::Null);

    assert_eq!(log.pages_for("a1"), vec!["/blog/hello".to_string()]);
    assert_eq!(log.pages_for("a2"), vec!["/blog/hello".to_string()]);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_resolver_without_page_records_nothing() {
    let log = Arc::new(DependencyLog::new());
    let schema = SchemaBuilder::new()
        .with_config(InferenceConfig::new().with_mapping("Post.author", "Author"))
        .with_recorder(log.clone())
        .build(authors_and_posts())
        .unwrap();

    let post = schema.find_record("Post", "p1").unwrap().clone();
    let author = schema
        .resolve("Post", &post, "author", &no_args(), &ResolveContext::new())
        .unwrap();
    assert!(author.is_some());
    assert!(log.is_empty());
}

#[test]
fn test_absent_reference_resolves_to_none() {
    let schema = SchemaBuilder::new()
        .with_config(InferenceConfig::new().with_mapping("Post.author", "Author"))
        .build(authors_and_posts())
        .unwrap();

    let post = schema.find_record("Post", "p2").unwrap().clone();
    let author = schema
        .resolve("Post", &post, "author", &no_args(), &ResolveContext::new())
        .unwrap();
    assert_eq!(author, None);
}

#[test]
fn test_mapping_to_unknown_type_drops_field() {
    let config = InferenceConfig::new().with_mapping("Post.author", "Writer");
    let schema = SchemaBuilder::new().with_config(config).build(authors_and_posts()).unwrap();

    let post = schema.object_type("Post").unwrap();
    assert!(post.field("author").is_none());
    assert!(post.field("title").is_some());
}

#[test]
fn test_mapping_to_later_type_drops_field() {
    let recs = records(vec![
        json!({"type": "Post", "id": "p1", "author": "a1"}),
        json!({"type": "Author", "id": "a1", "name": "Jo"}),
    ]);
    let config = InferenceConfig::new().with_mapping("Post.author", "Author");
    let schema = SchemaBuilder::new().with_config(config).build(recs).unwrap();

    assert!(schema.object_type("Post").unwrap().field("author").is_none());
}

#[test]
fn test_mapping_nested_selector() {
    let recs = records(vec![
        json!({"type": "Author", "id": "a1", "name": "Jo"}),
        json!({"type": "Post", "id": "p1", "meta": {"author": "a1", "words": 120}}),
    ]);
    let config = InferenceConfig::new().with_mapping("Post.meta.author", "Author");
    let schema = SchemaBuilder::new().with_config(config).build(recs).unwrap();

    let meta = schema.object_type("Post").unwrap().field("meta").unwrap();
    let meta = meta.field_type.object_type().unwrap();
    assert_eq!(meta.field("author").unwrap().field_type.to_string(), "Author");
    assert_eq!(meta.field("words").unwrap().field_type.to_string(), "Int");
}

#[test]
fn test_link_fields() {
    let recs = records(vec![
        json!({"type": "Author", "id": "a1", "name": "Jo"}),
        json!({"type": "Post", "id": "p1", "author___NODE": "a1", "related___NODE": ["a1"]}),
    ]);
    let schema = build_schema(recs).unwrap();
    let post_type = schema.object_type("Post").unwrap();

    let author = post_type.field("author").unwrap();
    assert_eq!(author.field_type.to_string(), "Author");
    assert_eq!(author.source.as_deref(), Some("author___NODE"));
    assert_eq!(post_type.field("related").unwrap().field_type.to_string(), "[Author]");
    assert!(post_type.field("author___NODE").is_none());

    let post = schema.find_record("Post", "p1").unwrap().clone();
    let resolved = schema
        .resolve("Post", &post, "author", &no_args(), &ResolveContext::new())
        .unwrap();
    assert_eq!(resolved.unwrap()["id"], json!("a1"));
}

#[test]
fn test_link_to_missing_node_drops_field() {
    let recs = records(vec![json!({"type": "Post", "id": "p1", "author___NODE": "nobody"})]);
    let schema = build_schema(recs).unwrap();
    assert!(schema.object_type("Post").unwrap().field("author").is_none());
}

#[test]
fn test_empty_link_list_drops_field() {
    let recs = records(vec![
        json!({"type": "Author", "id": "a1"}),
        json!({"type": "Post", "id": "p1", "related___NODE": []}),
    ]);
    let schema = build_schema(recs).unwrap();
    let post = schema.object_type("Post").unwrap();
    assert!(post.field("related").is_none());
    assert!(post.field("related___NODE").is_none());
}

// ============================================================================
// File Reference Tests
// ============================================================================

fn files_and_posts() -> Vec<JsonObject> {
    records(vec![
        json!({"type": "Post", "id": "p1", "cover": "images/cat.png", "link": "https://example.com/cat.png"}),
        json!({"type": "Post", "id": "p2", "cover": "./images/cat.png"}),
        json!({
            "type": "File",
            "id": "f1",
            "relativePath": "images/cat.png",
            "absolutePath": "/site/images/cat.png"
        }),
    ])
}

#[test]
fn test_file_type_is_built_first() {
    let schema = build_schema(files_and_posts()).unwrap();
    assert_eq!(schema.type_names(), vec!["File", "Post"]);
}

#[test]
fn test_relative_paths_reference_files() {
    let log = Arc::new(DependencyLog::new());
    let schema = SchemaBuilder::new()
        .with_recorder(log.clone())
        .build(files_and_posts())
        .unwrap();
    let post_type = schema.object_type("Post").unwrap();

    assert_eq!(post_type.field("cover").unwrap().field_type.to_string(), "File");
    assert_eq!(post_type.field("link").unwrap().field_type.to_string(), "String");

    let file = schema.get("File").unwrap();
    assert!(file.file_field.is_some());
    let file_type = schema.object_type("File").unwrap();
    assert_eq!(file_type.field("relativePath").unwrap().field_type.to_string(), "String");

    let ctx = ResolveContext::new().with_path("/gallery");
    for id in ["p1", "p2"] {
        let post = schema.find_record("Post", id).unwrap().clone();
        let cover = schema.resolve("Post", &post, "cover", &no_args(), &ctx).unwrap();
        assert_eq!(cover.unwrap()["id"], json!("f1"));
    }
    assert_eq!(log.pages_for("f1").len(), 2);
}

#[test]
fn test_paths_without_file_type_stay_strings() {
    let recs = records(vec![json!({"type": "Post", "cover": "images/cat.png"})]);
    let schema = build_schema(recs).unwrap();
    assert_eq!(
        schema.object_type("Post").unwrap().field("cover").unwrap().field_type.to_string(),
        "String"
    );
}

#[test]
fn test_executable_media_type_is_not_a_file() {
    let recs = records(vec![
        json!({"type": "File", "id": "f1", "relativePath": "setup.exe"}),
        json!({"type": "Post", "id": "p1", "installer": "setup.exe"}),
    ]);

    let schema = SchemaBuilder::new()
        .with_media_type_guesser(Arc::new(FixedGuesser(MS_DOWNLOAD)))
        .build(recs.clone())
        .unwrap();
    let installer = schema.object_type("Post").unwrap().field("installer").unwrap();
    assert_eq!(installer.field_type.to_string(), "String");

    let schema = SchemaBuilder::new()
        .with_media_type_guesser(Arc::new(FixedGuesser("application/zip")))
        .build(recs)
        .unwrap();
    let installer = schema.object_type("Post").unwrap().field("installer").unwrap();
    assert_eq!(installer.field_type.to_string(), "File");
}

// ============================================================================
// Schema Builder Tests
// ============================================================================

#[test]
fn test_node_fields_are_added() {
    let schema = build_schema(records(vec![json!({"type": "Post", "id": 7, "title": "x"})])).unwrap();
    let post = schema.object_type("Post").unwrap();

    assert_eq!(post.field_names(), vec!["children", "id", "parent", "title"]);
    assert_eq!(post.field("children").unwrap().field_type.to_string(), "[String]");
    assert!(schema.find_record("Post", "7").is_ok());
}

#[test]
fn test_record_without_type_is_rejected() {
    let recs = records(vec![json!({"type": "Post"}), json!({"title": "untyped"})]);
    let err = build_schema(recs).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { index: 1, .. }));
}

#[test]
fn test_invalid_mapping_is_rejected() {
    let config = InferenceConfig::new().with_mapping("author", "Author");
    let err = SchemaBuilder::new().with_config(config).build(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[test]
fn test_nested_type_names_are_unique() {
    let recs = records(vec![
        json!({"type": "Post", "meta": {"a": 1}}),
        json!({"type": "Page", "meta": {"b": 2}}),
    ]);
    let schema = build_schema(recs).unwrap();

    let post_meta = schema.object_type("Post").unwrap().field("meta").unwrap();
    let page_meta = schema.object_type("Page").unwrap().field("meta").unwrap();
    assert_eq!(post_meta.field_type.to_string(), "meta");
    assert_eq!(page_meta.field_type.to_string(), "meta2");
}

#[test]
fn test_suffixed_type_names_do_not_clash_with_real_fields() {
    let recs = records(vec![json!({
        "type": "Post",
        "a": {"items": {"x": 1}},
        "b": {"items": {"y": 1}},
        "items2": {"z": 1}
    })]);
    let schema = build_schema(recs).unwrap();
    let post = schema.object_type("Post").unwrap();

    let nested = |path: [&str; 2]| {
        let outer = post.field(path[0]).unwrap().field_type.object_type().unwrap();
        outer.field(path[1]).unwrap().field_type.to_string()
    };
    let mut names = vec![
        nested(["a", "items"]),
        nested(["b", "items"]),
        post.field("items2").unwrap().field_type.to_string(),
    ];
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);

    let sdl = schema.to_sdl();
    assert!(sdl.contains("  x: Int"));
    assert!(sdl.contains("  y: Int"));
    assert!(sdl.contains("  z: Int"));
    assert_eq!(schema.describe()["types"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_resolve_unknown_type_and_field() {
    let schema = build_schema(authors_and_posts()).unwrap();
    let post = schema.find_record("Post", "p1").unwrap().clone();
    let ctx = ResolveContext::new();

    let err = schema.resolve("Comment", &post, "title", &no_args(), &ctx).unwrap_err();
    assert!(matches!(err, Error::TypeNotFound { .. }));

    let err = schema.resolve("Post", &post, "rating", &no_args(), &ctx).unwrap_err();
    assert!(matches!(err, Error::FieldNotFound { .. }));

    let err = schema.find_record("Post", "p9").unwrap_err();
    assert!(matches!(err, Error::RecordNotFound { .. }));
}

// ============================================================================
// Printing Tests
// ============================================================================

#[test]
fn test_print_schema() {
    let recs = records(vec![json!({
        "type": "Post",
        "id": "p1",
        "date": "2021-03-01",
        "items": [{"a": 1}]
    })]);
    let sdl = build_schema(recs).unwrap().to_sdl();

    let expected = "\
type Post {
  children: [String]
  date(formatString: String, fromNow: Boolean, difference: String): String
  id: String
  items: [items]
  parent: String
}

type items {
  a: Int
}";
    assert_eq!(sdl, expected);
}

#[test]
fn test_describe_schema() {
    let recs = records(vec![json!({"type": "Post", "cover-image": "x"})]);
    let description = build_schema(recs).unwrap().describe();

    let post = &description["types"][0];
    assert_eq!(post["name"], json!("Post"));
    assert_eq!(post["node"], json!(true));
    assert_eq!(post["fields"]["cover_image"]["type"], json!("String"));
    assert_eq!(post["fields"]["cover_image"]["source"], json!("cover-image"));
}
