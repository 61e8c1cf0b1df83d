use super::RouteAssembler;
use crate::config::ScanConfig;
use crate::error::RouteError;
use crate::mapping::{MappingAnnotationKind, PATH_VARIABLE, REQUEST_MAPPING};
use crate::route::RouteDescriptor;
use crate::syntax::{
    Annotation, AnnotationIndex, ConstantDecl, ExpressionNode, MethodDecl, Parameter, SourceUnit,
    SymbolId, SyntaxTree, TypeDecl,
};
use std::collections::HashSet;

fn get_mapping() -> Annotation {
    Annotation::new(&MappingAnnotationKind::Get.qualified_name())
}

fn request_mapping() -> Annotation {
    Annotation::new(REQUEST_MAPPING)
}

fn path_variable(name: &str, type_name: &str) -> Parameter {
    Parameter::new(name, type_name).with_annotation(Annotation::new(PATH_VARIABLE))
}

fn single_type_tree(decl: TypeDecl) -> SyntaxTree {
    SyntaxTree::new(vec![SourceUnit::new(Some("Controller.java")).with_type(decl)])
}

fn assemble_all(tree: &SyntaxTree, kind: MappingAnnotationKind) -> Vec<RouteDescriptor> {
    let config = ScanConfig::default();
    let assembler = RouteAssembler::new(tree, &config);
    let name = kind.qualified_name();
    tree.occurrences(&name)
        .filter(|site| site.method.is_some())
        .flat_map(|site| assembler.assemble(&site, kind).unwrap())
        .collect()
}

#[test]
fn test_class_prefix_with_typed_variable() {
    let tree = single_type_tree(
        TypeDecl::new("com.acme.UserController")
            .with_annotation(
                request_mapping().with_attribute("path", ExpressionNode::string("/api")),
            )
            .with_method(
                MethodDecl::new("getUser")
                    .with_annotation(
                        get_mapping()
                            .with_attribute("path", ExpressionNode::string("/users/{id}")),
                    )
                    .with_parameter(path_variable("id", "Long")),
            ),
    );

    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.http_method, "GET");
    assert_eq!(route.full_path, "/api/users/{id}");
    assert_eq!(route.variable_type("id"), Some("Long"));
    assert_eq!(route.source.method_name.as_deref(), Some("getUser"));
    assert_eq!(route.source.type_name.as_deref(), Some("com.acme.UserController"));
}

#[test]
fn test_class_prefix_variables_are_typed() {
    let tree = single_type_tree(
        TypeDecl::new("com.acme.MemberController")
            .with_annotation(
                request_mapping().with_attribute("path", ExpressionNode::string("/orgs/{org}")),
            )
            .with_method(
                MethodDecl::new("member")
                    .with_annotation(
                        get_mapping()
                            .with_attribute("path", ExpressionNode::string("/members/{id}")),
                    )
                    .with_parameter(path_variable("org", "String"))
                    .with_parameter(path_variable("id", "Long")),
            ),
    );

    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].full_path, "/orgs/{org}/members/{id}");
    assert_eq!(routes[0].variable_type("org"), Some("String"));
    assert_eq!(routes[0].variable_type("id"), Some("Long"));
}

#[test]
fn test_array_paths_without_class_mapping() {
    let tree = single_type_tree(TypeDecl::new("com.acme.Plain").with_method(
        MethodDecl::new("both").with_annotation(get_mapping().with_attribute(
            "path",
            ExpressionNode::array(vec![ExpressionNode::string("/a"), ExpressionNode::string("/b")]),
        )),
    ));

    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    let paths: Vec<_> = routes.iter().map(|r| r.full_path.as_str()).collect();
    assert_eq!(paths, vec!["/a", "/b"]);
}

#[test]
fn test_value_referencing_partially_resolvable_constant() {
    let tree = single_type_tree(
        TypeDecl::new("com.acme.Paths")
            .with_constant(ConstantDecl::new(
                "ROOT",
                Some(ExpressionNode::concat(
                    ExpressionNode::string("/"),
                    ExpressionNode::reference("SUFFIX", None),
                )),
            ))
            .with_method(MethodDecl::new("root").with_annotation(get_mapping().with_attribute(
                "value",
                ExpressionNode::reference("ROOT", Some(SymbolId::new("com.acme.Paths", "ROOT"))),
            ))),
    );

    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].full_path, "/");
}

#[test]
fn test_path_takes_precedence_over_value() {
    let tree = single_type_tree(TypeDecl::new("com.acme.C").with_method(
        MethodDecl::new("m").with_annotation(
            get_mapping()
                .with_attribute("value", ExpressionNode::string("/from-value"))
                .with_attribute("path", ExpressionNode::string("/from-path")),
        ),
    ));
    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes[0].full_path, "/from-path");
}

#[test]
fn test_cartesian_product_size_and_distinct_origins() {
    let tree = single_type_tree(
        TypeDecl::new("com.acme.C")
            .with_annotation(request_mapping().with_attribute(
                "value",
                ExpressionNode::array(vec![
                    ExpressionNode::string("/v1"),
                    ExpressionNode::string("/v2"),
                ]),
            ))
            .with_method(
                MethodDecl::new("m").with_annotation(
                    get_mapping()
                        .with_attribute(
                            "path",
                            ExpressionNode::array(vec![
                                ExpressionNode::string("/x"),
                                ExpressionNode::string("/x"),
                                ExpressionNode::string("/y"),
                            ]),
                        )
                        .with_attribute(
                            "params",
                            ExpressionNode::array(vec![
                                ExpressionNode::string("mode=a"),
                                ExpressionNode::string("mode=b"),
                            ]),
                        ),
                ),
            ),
    );

    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes.len(), 2 * 3 * 2);
    let origins: HashSet<_> = routes.iter().map(|r| r.origin).collect();
    assert_eq!(origins.len(), routes.len());
    assert_eq!(routes.iter().filter(|r| r.full_path == "/v1/x").count(), 4);
    assert_eq!(routes[0].label(), "GET /v1/x [mode=a]");
}

#[test]
fn test_empty_class_and_method_paths_join_to_empty() {
    let tree = single_type_tree(
        TypeDecl::new("com.acme.C")
            .with_annotation(request_mapping())
            .with_method(MethodDecl::new("m").with_annotation(get_mapping())),
    );
    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].full_path, "");
    assert_eq!(routes[0].params, "");
}

#[test]
fn test_duplicate_path_variable_uses_later_parameter() {
    let tree = single_type_tree(TypeDecl::new("com.acme.C").with_method(
        MethodDecl::new("m")
            .with_annotation(
                get_mapping().with_attribute("path", ExpressionNode::string("/items/{id}")),
            )
            .with_parameter(path_variable("id", "Long"))
            .with_parameter(
                Parameter::new("key", "UUID").with_annotation(
                    Annotation::new(PATH_VARIABLE)
                        .with_attribute("name", ExpressionNode::string("id")),
                ),
            ),
    ));
    let routes = assemble_all(&tree, MappingAnnotationKind::Get);
    assert_eq!(routes[0].variable_type("id"), Some("UUID"));
}

#[test]
fn test_type_level_occurrence_is_malformed() {
    let tree = single_type_tree(TypeDecl::new("com.acme.C").with_annotation(get_mapping()));
    let config = ScanConfig::default();
    let assembler = RouteAssembler::new(&tree, &config);
    let name = MappingAnnotationKind::Get.qualified_name();
    let site = tree.occurrences(&name).next().unwrap();
    let err = assembler.assemble(&site, MappingAnnotationKind::Get).unwrap_err();
    assert!(matches!(err, RouteError::MalformedTarget { .. }));
}

#[test]
fn test_request_mapping_verbs() {
    let tree = SyntaxTree::default();
    let config = ScanConfig::default();
    let assembler = RouteAssembler::new(&tree, &config);

    let none = request_mapping();
    assert_eq!(assembler.http_method(&none, MappingAnnotationKind::Request), "*");

    let single = request_mapping()
        .with_attribute("method", ExpressionNode::reference("RequestMethod.POST", None));
    assert_eq!(assembler.http_method(&single, MappingAnnotationKind::Request), "POST");

    let several = request_mapping().with_attribute(
        "method",
        ExpressionNode::array(vec![
            ExpressionNode::reference("RequestMethod.GET", None),
            ExpressionNode::reference("RequestMethod.HEAD", None),
            ExpressionNode::reference("RequestMethod.GET", None),
        ]),
    );
    assert_eq!(assembler.http_method(&several, MappingAnnotationKind::Request), "GET|HEAD");

    assert_eq!(assembler.http_method(&single, MappingAnnotationKind::Delete), "DELETE");
}

#[test]
fn test_configured_wildcard_method() {
    let tree = single_type_tree(TypeDecl::new("com.acme.C").with_method(
        MethodDecl::new("any").with_annotation(
            request_mapping().with_attribute("path", ExpressionNode::string("/any")),
        ),
    ));
    let config = ScanConfig {
        wildcard_method: "ANY".into(),
        ..ScanConfig::default()
    };
    let assembler = RouteAssembler::new(&tree, &config);
    let site = tree
        .occurrences(REQUEST_MAPPING)
        .find(|s| s.method.is_some())
        .unwrap();
    let routes = assembler.assemble(&site, MappingAnnotationKind::Request).unwrap();
    assert_eq!(routes[0].label(), "ANY /any");
}

#[test]
fn test_owner_without_class_mapping_contributes_no_prefix() {
    let tree = SyntaxTree::default();
    let config = ScanConfig::default();
    let assembler = RouteAssembler::new(&tree, &config);
    let annotation = get_mapping().with_attribute("path", ExpressionNode::string("users"));
    let method = MethodDecl::new("m");
    let site = crate::syntax::AnnotationSite::on_method(&annotation, &method, None);
    let routes = assembler.assemble(&site, MappingAnnotationKind::Get).unwrap();
    assert_eq!(routes[0].full_path, "/users");
    assert_eq!(routes[0].source.type_name, None);
}
