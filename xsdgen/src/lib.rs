//! # xsdgen
//!
//! Resolve XML schema type declarations and drive per-language code
//! generation.
//!
//! ## Features
//!
//! - **Built-in type table** - XSD datatypes spelled for Go, TypeScript, C,
//!   Java and Rust
//! - **Type resolution** - restrictions, enumerations, lists and unions over an
//!   ordered schema document
//! - **Identifier normalization** - snake_case, PascalCase and per-run unique
//!   field names
//! - **Hook dispatch** - per-language generation routines looked up by name
//!
//! ## Quick Start
//!
//! ```ignore
//! use xsdgen::prelude::*;
//!
//! let nodes: Vec<SchemaNode> = vec![SimpleType::new("Amount", "decimal").into()];
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_fn("RustSimpleType", |ctx, node| {
//!     let target = ctx.resolve(node.name());
//!     ctx.emit(&format!("pub type {} = {};\n", node.name(), target.type_name()));
//!     Ok(())
//! });
//!
//! let generator = Generator::builder().language(Language::Rust).build()?;
//! let report = generator.run(&nodes, &dispatcher);
//! assert_eq!(report.output, "pub type Amount = f64;\n");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Node model, built-in types, qualified names, resolution
//! - [`codegen`] - Naming, ordering, dispatch and the generation driver

pub mod prelude;

/// Schema node model and type resolution.
pub mod schema {
    pub use xsdgen_schema::*;
}

/// Code generation over resolved schemas.
pub mod codegen {
    pub use xsdgen_codegen::*;
}
