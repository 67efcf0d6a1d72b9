//! Name-based dispatch of generation hooks.
//!
//! Hooks are registered under a method name. By convention the name is the
//! target language followed by the node kind (`"RustSimpleType"`,
//! `"GoComplexType"`), see [`hook_name`]. Dispatching a name with no hook is a
//! no-op, so a backend only registers the hooks it needs.

use crate::context::GeneratorContext;
use crate::error::CodegenError;
use std::collections::HashMap;
use std::sync::Arc;
use xsdgen_schema::{Language, NodeKind, SchemaNode};

/// A generation routine invoked by name.
pub trait Hook: Send + Sync {
    /// Generates code for `node` into `ctx`.
    ///
    /// # Errors
    /// Returns an error if the node cannot be rendered. The error is passed
    /// through to the dispatch caller unchanged.
    fn call(&self, ctx: &mut GeneratorContext<'_>, node: &SchemaNode) -> Result<(), CodegenError>;
}

/// Wrapper to convert a closure into a [`Hook`].
pub struct FnHook<F> {
    hook: F,
}

impl<F> FnHook<F>
where
    F: Fn(&mut GeneratorContext<'_>, &SchemaNode) -> Result<(), CodegenError> + Send + Sync,
{
    /// Creates a new function hook.
    pub fn new(hook: F) -> Self {
        Self { hook }
    }
}

impl<F> Hook for FnHook<F>
where
    F: Fn(&mut GeneratorContext<'_>, &SchemaNode) -> Result<(), CodegenError> + Send + Sync,
{
    fn call(&self, ctx: &mut GeneratorContext<'_>, node: &SchemaNode) -> Result<(), CodegenError> {
        (self.hook)(ctx, node)
    }
}

/// A target language backend: a set of hooks registered together.
pub trait Backend: Send + Sync {
    /// Language this backend generates.
    fn language(&self) -> Language;

    /// Registers the backend's hooks.
    fn register(&self, dispatcher: &mut Dispatcher);
}

/// Result of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A hook was found and returned successfully.
    Handled,
    /// No hook is registered under the name.
    Skipped,
}

/// Returns the conventional hook name for `kind` in `language`.
#[must_use]
pub fn hook_name(language: Language, kind: NodeKind) -> String {
    format!("{}{}", language.name(), kind.as_str())
}

/// Registry routing method names to hooks.
#[derive(Default, Clone)]
pub struct Dispatcher {
    hooks: HashMap<String, Arc<dyn Hook>>,
}

impl Dispatcher {
    /// Creates a new empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Registers a hook under `method`, replacing any previous one.
    pub fn register<H: Hook + 'static>(&mut self, method: impl Into<String>, hook: H) {
        self.hooks.insert(method.into(), Arc::new(hook));
    }

    /// Registers a closure under `method`.
    pub fn register_fn<F>(&mut self, method: impl Into<String>, hook: F)
    where
        F: Fn(&mut GeneratorContext<'_>, &SchemaNode) -> Result<(), CodegenError>
            + Send
            + Sync
            + 'static,
    {
        self.register(method, FnHook::new(hook));
    }

    /// Registers every hook of `backend`.
    pub fn add_backend(&mut self, backend: &dyn Backend) {
        tracing::debug!("Registering {} backend", backend.language());
        backend.register(self);
    }

    /// Returns the dispatcher with `backend` registered.
    #[must_use]
    pub fn with_backend(mut self, backend: &dyn Backend) -> Self {
        self.add_backend(backend);
        self
    }

    /// Returns true if a hook is registered under `method`.
    #[must_use]
    pub fn has_hook(&self, method: &str) -> bool {
        self.hooks.contains_key(method)
    }

    /// Returns the registered method names, sorted.
    #[must_use]
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Returns the number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hook is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Invokes the hook registered under `method`.
    ///
    /// # Errors
    /// Returns the hook's own error if it fails. A missing hook is not an
    /// error and yields [`DispatchOutcome::Skipped`].
    pub fn dispatch(
        &self,
        method: &str,
        ctx: &mut GeneratorContext<'_>,
        node: &SchemaNode,
    ) -> Result<DispatchOutcome, CodegenError> {
        let Some(hook) = self.hooks.get(method) else {
            tracing::debug!("No hook for method={} node={}", method, node.name());
            return Ok(DispatchOutcome::Skipped);
        };
        hook.call(ctx, node)?;
        Ok(DispatchOutcome::Handled)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("methods", &self.methods())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use xsdgen_schema::{ComplexType, SimpleType};

    fn simple_node() -> SchemaNode {
        SimpleType::new("Max35Text", "string").into()
    }

    #[test]
    fn test_dispatcher_new() {
        let dispatcher = Dispatcher::new();
        assert!(dispatcher.is_empty());
        assert!(!dispatcher.has_hook("RustSimpleType"));
    }

    #[test]
    fn test_hook_name() {
        assert_eq!(hook_name(Language::Rust, NodeKind::SimpleType), "RustSimpleType");
        assert_eq!(
            hook_name(Language::TypeScript, NodeKind::AttributeGroup),
            "TypeScriptAttributeGroup"
        );
    }

    #[test]
    fn test_dispatch_missing_method_is_noop() {
        let dispatcher = Dispatcher::new();
        let nodes = vec![simple_node()];
        let mut ctx = GeneratorContext::new(Language::Go, &nodes, "");

        let outcome = dispatcher.dispatch("GoSimpleType", &mut ctx, &nodes[0]);
        assert!(matches!(outcome, Ok(DispatchOutcome::Skipped)));
        assert!(ctx.output().is_empty());
    }

    #[test]
    fn test_dispatch_invokes_hook() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_fn("RustSimpleType", |ctx, node| {
            let target = ctx.resolve(node.name());
            ctx.emit(&format!("pub type {} = {};\n", node.name(), target.type_name()));
            Ok(())
        });

        let nodes = vec![simple_node()];
        let mut ctx = GeneratorContext::new(Language::Rust, &nodes, "");
        let outcome = dispatcher.dispatch("RustSimpleType", &mut ctx, &nodes[0]);

        assert!(matches!(outcome, Ok(DispatchOutcome::Handled)));
        assert_eq!(ctx.output(), "pub type Max35Text = String;\n");
    }

    #[test]
    fn test_dispatch_propagates_hook_error() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_fn("GoComplexType", |_ctx, node| {
            Err(CodegenError::hook("GoComplexType", format!("cannot render {}", node.name())))
        });

        let nodes: Vec<SchemaNode> = vec![ComplexType::new("Party").into()];
        let mut ctx = GeneratorContext::new(Language::Go, &nodes, "");
        let err = dispatcher
            .dispatch("GoComplexType", &mut ctx, &nodes[0])
            .unwrap_err();

        assert!(matches!(
            err,
            CodegenError::Hook { ref method, ref message }
                if method == "GoComplexType" && message == "cannot render Party"
        ));
    }

    struct CountingBackend {
        calls: Arc<AtomicUsize>,
    }

    impl Backend for CountingBackend {
        fn language(&self) -> Language {
            Language::Java
        }

        fn register(&self, dispatcher: &mut Dispatcher) {
            let calls = self.calls.clone();
            dispatcher.register_fn(
                hook_name(self.language(), NodeKind::SimpleType),
                move |_ctx, _node| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                },
            );
        }
    }

    #[test]
    fn test_backend_registration() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new().with_backend(&CountingBackend {
            calls: calls.clone(),
        });

        assert_eq!(dispatcher.methods(), ["JavaSimpleType"]);

        let nodes = vec![simple_node()];
        let mut ctx = GeneratorContext::new(Language::Java, &nodes, "");
        for _ in 0..3 {
            let _ = dispatcher.dispatch("JavaSimpleType", &mut ctx, &nodes[0]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_register_replaces_previous_hook() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_fn("CSimpleType", |ctx, _| {
            ctx.emit("first");
            Ok(())
        });
        dispatcher.register_fn("CSimpleType", |ctx, _| {
            ctx.emit("second");
            Ok(())
        });
        assert_eq!(dispatcher.len(), 1);

        let nodes = vec![simple_node()];
        let mut ctx = GeneratorContext::new(Language::C, &nodes, "");
        dispatcher
            .dispatch("CSimpleType", &mut ctx, &nodes[0])
            .unwrap();
        assert_eq!(ctx.output(), "second");
    }

    #[test]
    fn test_dispatcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispatcher>();
    }
}
