//! The binding method declaration view.
//!
//! A [`BindingMethod`] is the read-only, pre-extracted description of one
//! candidate binding method. Validators only ever read it.

use super::{
    Annotation, BindingDomainError, BindingKind, EnclosingElement, Modifier, Modifiers,
    QualifiedName, TypeRef, names::is_identifier, vocabulary,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    ty: TypeRef,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter type.
    #[must_use]
    pub const fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

/// A type named in the method's `throws` clause.
///
/// `ancestors` lists the exception's superclasses, nearest first, as
/// resolved by the extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrownType {
    name: QualifiedName,
    #[serde(default)]
    ancestors: Vec<QualifiedName>,
}

impl ThrownType {
    /// Creates a thrown type with its superclass chain.
    #[must_use]
    pub fn new(name: QualifiedName, ancestors: impl IntoIterator<Item = QualifiedName>) -> Self {
        Self {
            name,
            ancestors: ancestors.into_iter().collect(),
        }
    }

    /// Returns the exception type name.
    #[must_use]
    pub const fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the superclass chain.
    #[must_use]
    pub fn ancestors(&self) -> &[QualifiedName] {
        &self.ancestors
    }

    /// Returns `true` when the type is `superclass` or extends it.
    #[must_use]
    pub fn is_subclass_of(&self, superclass: &QualifiedName) -> bool {
        &self.name == superclass || self.ancestors.contains(superclass)
    }
}

/// Read-only view of a candidate binding method.
///
/// # Invariants
///
/// - `name` is a valid identifier
/// - the return type is always present (`void` is represented explicitly)
/// - the view is never modified after construction
///
/// # Examples
///
/// ```
/// use bindwright::binding::domain::{
///     Annotation, BindingMethod, ContainerKind, EnclosingElement, Modifier, QualifiedName,
///     vocabulary,
/// };
///
/// let module = EnclosingElement::new(
///     QualifiedName::new("com.example.FooModule").expect("valid name"),
///     ContainerKind::Module,
/// );
/// let method = BindingMethod::builder(module, "bar")
///     .with_modifier(Modifier::Abstract)
///     .with_annotation(Annotation::new(
///         QualifiedName::new(vocabulary::MULTIBINDS).expect("valid name"),
///     ))
///     .returning("java.util.Set<com.example.Foo>".parse().expect("valid type"))
///     .build()
///     .expect("valid method");
///
/// assert_eq!(method.subject(), "com.example.FooModule#bar()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BindingMethodRecord")]
pub struct BindingMethod {
    enclosing: EnclosingElement,
    name: String,
    modifiers: Modifiers,
    type_parameters: Vec<String>,
    parameters: Vec<Parameter>,
    return_type: TypeRef,
    annotations: Vec<Annotation>,
    thrown_types: Vec<ThrownType>,
}

impl BindingMethod {
    /// Returns a builder for a method named `name` inside `enclosing`.
    #[must_use]
    pub fn builder(enclosing: EnclosingElement, name: impl Into<String>) -> BindingMethodBuilder {
        BindingMethodBuilder::new(enclosing, name)
    }

    /// Returns the enclosing type.
    #[must_use]
    pub const fn enclosing(&self) -> &EnclosingElement {
        &self.enclosing
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the modifier set.
    #[must_use]
    pub const fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Returns `true` when the method carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    /// Returns the declared type parameter names.
    #[must_use]
    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the return type.
    #[must_use]
    pub const fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Returns every annotation on the method.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Returns the declared exception types.
    #[must_use]
    pub fn thrown_types(&self) -> &[ThrownType] {
        &self.thrown_types
    }

    /// Returns `true` when an annotation of the named type is present.
    #[must_use]
    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotations.iter().any(|annotation| annotation.is(type_name))
    }

    /// Iterates the map-key annotations on the method.
    pub fn map_keys(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|annotation| annotation.is_map_key())
    }

    /// Iterates the `@IntoSet`, `@IntoMap` and `@ElementsIntoSet`
    /// annotations on the method.
    pub fn multibinding_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|annotation| {
            vocabulary::MULTIBINDING_ANNOTATIONS
                .iter()
                .any(|name| annotation.is(name))
        })
    }

    /// Returns the binding kinds whose method annotation is present.
    #[must_use]
    pub fn binding_kinds(&self) -> Vec<BindingKind> {
        BindingKind::ALL
            .into_iter()
            .filter(|kind| self.has_annotation(kind.annotation()))
            .collect()
    }

    /// Returns the diagnostic subject, `Enclosing#name(ParamTypes)`.
    #[must_use]
    pub fn subject(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BindingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}(", self.enclosing.name(), self.name)?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", parameter.ty())?;
        }
        f.write_str(")")
    }
}

/// Builder for [`BindingMethod`] views.
#[derive(Debug)]
pub struct BindingMethodBuilder {
    enclosing: EnclosingElement,
    name: String,
    modifiers: Modifiers,
    type_parameters: Vec<String>,
    parameters: Vec<Parameter>,
    return_type: Option<TypeRef>,
    annotations: Vec<Annotation>,
    thrown_types: Vec<ThrownType>,
}

impl BindingMethodBuilder {
    /// Creates a builder for a method named `name` inside `enclosing`.
    #[must_use]
    pub fn new(enclosing: EnclosingElement, name: impl Into<String>) -> Self {
        Self {
            enclosing,
            name: name.into(),
            modifiers: Modifiers::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            annotations: Vec::new(),
            thrown_types: Vec::new(),
        }
    }

    /// Adds a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Adds a type parameter.
    #[must_use]
    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds a declared exception type.
    #[must_use]
    pub fn with_thrown_type(mut self, thrown: ThrownType) -> Self {
        self.thrown_types.push(thrown);
        self
    }

    /// Builds the method view.
    ///
    /// # Errors
    ///
    /// Returns [`BindingDomainError::InvalidIdentifier`] when the method,
    /// a parameter or a type parameter name is not an identifier, and
    /// [`BindingDomainError::MissingReturnType`] when no return type was
    /// set.
    pub fn build(self) -> Result<BindingMethod, BindingDomainError> {
        let invalid_name = std::iter::once(self.name.as_str())
            .chain(self.type_parameters.iter().map(String::as_str))
            .chain(self.parameters.iter().map(Parameter::name))
            .find(|name| !is_identifier(name));
        if let Some(name) = invalid_name {
            return Err(BindingDomainError::InvalidIdentifier(name.to_owned()));
        }

        let Some(return_type) = self.return_type else {
            return Err(BindingDomainError::MissingReturnType(self.name));
        };

        Ok(BindingMethod {
            enclosing: self.enclosing,
            name: self.name,
            modifiers: self.modifiers,
            type_parameters: self.type_parameters,
            parameters: self.parameters,
            return_type,
            annotations: self.annotations,
            thrown_types: self.thrown_types,
        })
    }
}

/// Serialised form of a binding method, validated on conversion.
#[derive(Debug, Deserialize)]
struct BindingMethodRecord {
    enclosing: EnclosingElement,
    name: String,
    #[serde(default)]
    modifiers: Modifiers,
    #[serde(default)]
    type_parameters: Vec<String>,
    #[serde(default)]
    parameters: Vec<Parameter>,
    return_type: TypeRef,
    #[serde(default)]
    annotations: Vec<Annotation>,
    #[serde(default)]
    thrown_types: Vec<ThrownType>,
}

impl TryFrom<BindingMethodRecord> for BindingMethod {
    type Error = BindingDomainError;

    fn try_from(record: BindingMethodRecord) -> Result<Self, Self::Error> {
        let builder = BindingMethodBuilder {
            enclosing: record.enclosing,
            name: record.name,
            modifiers: record.modifiers,
            type_parameters: record.type_parameters,
            parameters: record.parameters,
            return_type: Some(record.return_type),
            annotations: record.annotations,
            thrown_types: record.thrown_types,
        };
        builder.build()
    }
}

/// A module-like type together with the binding methods it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    element: EnclosingElement,
    #[serde(default)]
    methods: Vec<BindingMethod>,
}

impl ModuleDeclaration {
    /// Creates a module declaration without methods.
    #[must_use]
    pub const fn new(element: EnclosingElement) -> Self {
        Self {
            element,
            methods: Vec::new(),
        }
    }

    /// Appends a method.
    #[must_use]
    pub fn with_method(mut self, method: BindingMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Returns the module type.
    #[must_use]
    pub const fn element(&self) -> &EnclosingElement {
        &self.element
    }

    /// Returns the module's qualified name.
    #[must_use]
    pub const fn name(&self) -> &QualifiedName {
        self.element.name()
    }

    /// Returns the methods in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[BindingMethod] {
        &self.methods
    }
}
