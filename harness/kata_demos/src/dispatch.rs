//! The overload and override resolution demo.

use kata_dispatch::{CapabilityRef, DispatchRegistry, DispatchResult, TypeTag};

use crate::sink::OutputSink;

/// Recorded outcomes of the dispatch call sites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport {
    /// `Calculator::add(1, 2)` - base static declaration.
    pub static_base_add: i64,
    /// `Negator::add(1, 2)` - derived redeclaration hides the base one.
    pub static_hidden_add: i64,
    /// `Negator::cmp(2, 1)` - not redeclared, resolved via the parent.
    pub static_inherited_cmp: i64,
    /// Instance `add(1, 2)` through a Calculator-bound reference.
    pub instance_base_add: i64,
    /// Instance `add(1, 2)` through a Calculator-declared reference bound
    /// to a Negator: the override runs.
    pub instance_override_add: i64,
    /// Instance `add(1, 2, 3)` through the same widened reference: the
    /// derived-only arity is invisible, so this is an error.
    pub widened_add3: DispatchResult<i64>,
    /// Instance `add(1, 2, 3)` through a Negator-declared reference.
    pub narrowed_add3: i64,
}

/// Exercise every demo call site against the registry.
pub fn dispatch_report(registry: &DispatchRegistry) -> DispatchResult<DispatchReport> {
    let base = CapabilityRef::bind(TypeTag::Calculator, TypeTag::Calculator)?;
    let widened = CapabilityRef::bind(TypeTag::Calculator, TypeTag::Negator)?;
    let narrowed = CapabilityRef::bind(TypeTag::Negator, TypeTag::Negator)?;

    Ok(DispatchReport {
        static_base_add: registry.call_static(TypeTag::Calculator, "add", &[1, 2])?,
        static_hidden_add: registry.call_static(TypeTag::Negator, "add", &[1, 2])?,
        static_inherited_cmp: registry.call_static(TypeTag::Negator, "cmp", &[2, 1])?,
        instance_base_add: registry.call_instance(base, "add", &[1, 2])?,
        instance_override_add: registry.call_instance(widened, "add", &[1, 2])?,
        widened_add3: registry.call_instance(widened, "add", &[1, 2, 3]),
        narrowed_add3: registry.call_instance(narrowed, "add", &[1, 2, 3])?,
    })
}

/// Build the built-in registry, run the call sites, print one line each.
pub fn run_dispatch_demo(sink: &OutputSink) -> DispatchResult<()> {
    let registry = DispatchRegistry::builtin()?;
    let report = dispatch_report(&registry)?;

    sink.println(&format!(
        "static Calculator::add(1, 2) = {}",
        report.static_base_add
    ));
    sink.println(&format!(
        "static Negator::add(1, 2) = {}",
        report.static_hidden_add
    ));
    sink.println(&format!(
        "static Negator::cmp(2, 1) = {}",
        report.static_inherited_cmp
    ));
    sink.println(&format!(
        "calculator.add(1, 2) = {}",
        report.instance_base_add
    ));
    sink.println(&format!(
        "widened.add(1, 2) = {}",
        report.instance_override_add
    ));
    match &report.widened_add3 {
        Ok(value) => sink.println(&format!("widened.add(1, 2, 3) = {value}")),
        Err(err) => sink.println(&format!("widened.add(1, 2, 3): {err}")),
    }
    sink.println(&format!(
        "narrowed.add(1, 2, 3) = {}",
        report.narrowed_add3
    ));
    Ok(())
}
