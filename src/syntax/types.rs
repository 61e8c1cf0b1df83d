use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Qualified name of a constant declaration: `<qualified type>.<field>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(type_name: &str, field_name: &str) -> Self {
        Self(format!("{type_name}.{field_name}"))
    }

    /// Qualified name of the declaring type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.rsplit_once('.').map(|(t, _)| t).unwrap_or("")
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        self.0.rsplit_once('.').map(|(_, f)| f).unwrap_or(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returned when a symbol id has no `.` separating type and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSymbolIdError {
    pub input: String,
}

impl Display for ParseSymbolIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid symbol id '{}': expected <qualified type>.<field>",
            self.input
        )
    }
}

impl std::error::Error for ParseSymbolIdError {}

impl Display for SymbolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SymbolId {
    type Err = ParseSymbolIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((t, f)) if !t.is_empty() && !f.is_empty() => Ok(SymbolId(s.to_string())),
            _ => Err(ParseSymbolIdError {
                input: s.to_string(),
            }),
        }
    }
}

impl Serialize for SymbolId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SymbolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<SymbolId>().map_err(serde::de::Error::custom)
    }
}

/// Compile-time value a host attached to a literal node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Integer(i) => write!(f, "{i}"),
            LiteralValue::Float(x) => f.write_str(&jvm_double(*x)),
            LiteralValue::Text(s) => f.write_str(s),
        }
    }
}

/// `Double.toString` rendering: plain decimal with at least one fraction
/// digit in `[1e-3, 1e7)`, `<m>.<f>E<exp>` outside it.
fn jvm_double(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = x.abs();
    if abs == 0.0 || (1e-3..1e7).contains(&abs) {
        return format!("{x:?}");
    }
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

/// An expression as it appears in an annotation attribute or a constant initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpressionNode {
    /// A literal token; `value` is present when the host already folded it.
    Literal {
        raw: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<LiteralValue>,
    },
    /// Binary `left + right`.
    Concat {
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
    /// N-ary `a + b + c`.
    Polyadic { operands: Vec<ExpressionNode> },
    /// A name reference; `target` is absent when the host could not resolve it.
    Reference {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<SymbolId>,
    },
    /// `{a, b, ...}`
    Array { elements: Vec<ExpressionNode> },
    /// Any construct the engine does not fold (calls, arithmetic, ...).
    Other { text: String },
}

impl ExpressionNode {
    /// A double-quoted string literal with its folded value.
    pub fn string(value: &str) -> Self {
        ExpressionNode::Literal {
            raw: format!("\"{value}\""),
            value: Some(LiteralValue::Text(value.to_string())),
        }
    }

    /// A literal the host did not fold; only its raw text is known.
    pub fn raw_literal(raw: &str) -> Self {
        ExpressionNode::Literal {
            raw: raw.to_string(),
            value: None,
        }
    }

    pub fn concat(left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Concat {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn polyadic(operands: Vec<ExpressionNode>) -> Self {
        ExpressionNode::Polyadic { operands }
    }

    pub fn reference(name: &str, target: Option<SymbolId>) -> Self {
        ExpressionNode::Reference {
            name: name.to_string(),
            target,
        }
    }

    pub fn array(elements: Vec<ExpressionNode>) -> Self {
        ExpressionNode::Array { elements }
    }

    /// Source text of the node as the host would print it.
    #[must_use]
    pub fn source_text(&self) -> String {
        match self {
            ExpressionNode::Literal { raw, .. } => raw.clone(),
            ExpressionNode::Concat { left, right } => {
                format!("{} + {}", left.source_text(), right.source_text())
            }
            ExpressionNode::Polyadic { operands } => operands
                .iter()
                .map(ExpressionNode::source_text)
                .collect::<Vec<_>>()
                .join(" + "),
            ExpressionNode::Reference { name, .. } => name.clone(),
            ExpressionNode::Array { elements } => format!(
                "{{{}}}",
                elements
                    .iter()
                    .map(ExpressionNode::source_text)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ExpressionNode::Other { text } => text.clone(),
        }
    }
}

/// One annotation occurrence with its explicitly written attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub qualified_name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, ExpressionNode>,
}

impl Annotation {
    pub fn new(qualified_name: &str) -> Self {
        Self {
            qualified_name: qualified_name.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: ExpressionNode) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&ExpressionNode> {
        self.attributes.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Syntactic type as written, e.g. `Long` or `List<String>`.
    pub type_name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn annotation(&self, qualified_name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.qualified_name == qualified_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl MethodDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameters: Vec::new(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A named constant (`static final` field, `const val`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<ExpressionNode>,
}

impl ConstantDecl {
    pub fn new(name: &str, initializer: Option<ExpressionNode>) -> Self {
        Self {
            name: name.to_string(),
            initializer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub qualified_name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub constants: Vec<ConstantDecl>,
    /// Build module the type belongs to, if the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl TypeDecl {
    pub fn new(qualified_name: &str) -> Self {
        Self {
            qualified_name: qualified_name.to_string(),
            annotations: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
            module: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: ConstantDecl) -> Self {
        self.constants.push(constant);
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: &str) -> Self {
        self.module = Some(module.to_string());
        self
    }

    /// Unqualified name (`com.acme.UserController` -> `UserController`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&ConstantDecl> {
        self.constants.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl SourceUnit {
    pub fn new(file: Option<&str>) -> Self {
        Self {
            file: file.map(str::to_string),
            types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }
}

/// Snapshot of every source unit the host indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

impl SyntaxTree {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.units.iter().flat_map(|u| u.types.iter())
    }

    #[must_use]
    pub fn find_type(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.types().find(|t| t.qualified_name == qualified_name)
    }
}
