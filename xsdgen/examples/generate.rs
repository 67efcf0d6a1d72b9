//! Example generation run over a small payment schema.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate`

use std::collections::HashMap;
use xsdgen::prelude::*;

/// Minimal Rust backend: type aliases, enums and structs.
struct RustBackend;

impl RustBackend {
    fn simple_type(ctx: &mut GeneratorContext<'_>, node: &SchemaNode) -> Result<(), CodegenError> {
        let name = to_pascal_case(node.name());
        match ctx.resolve(node.name()) {
            ResolvedType::Restricted { restriction, .. } if !restriction.enumeration.is_empty() => {
                ctx.emit(&format!("pub enum {name} {{\n"));
                for value in &restriction.enumeration {
                    ctx.emit(&format!("    {},\n", sanitize_identifier(&to_pascal_case(value))));
                }
                ctx.emit("}\n\n");
            }
            ResolvedType::Restricted { base, .. } => {
                let target = ctx.resolve(&base);
                ctx.emit(&format!("pub type {name} = {};\n\n", target.type_name()));
            }
            ResolvedType::List { item, .. } => {
                ctx.emit(&format!("pub type {name} = Vec<{item}>;\n\n"));
            }
            other => {
                ctx.emit(&format!("pub type {name} = {};\n\n", other.type_name()));
            }
        }
        Ok(())
    }

    fn complex_type(ctx: &mut GeneratorContext<'_>, node: &SchemaNode) -> Result<(), CodegenError> {
        let Some(complex) = node.as_complex_type() else {
            return Err(CodegenError::generation("expected a complex type"));
        };
        ctx.emit(&format!("pub struct {} {{", to_pascal_case(&complex.name)));
        for element in &complex.elements {
            let doc = element.doc.as_deref().unwrap_or_default();
            ctx.emit(&field_comment(&element.name, doc, "    ///").replace("\r\n", "\n"));
            let field = to_snake_case(&ctx.field_name(&element.name));
            let target = ctx.resolve(&element.type_name);
            ctx.emit(&format!("    pub {field}: {},\n", target.type_name()));
        }
        ctx.emit("}\n\n");
        Ok(())
    }
}

impl Backend for RustBackend {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn register(&self, dispatcher: &mut Dispatcher) {
        let lang = self.language();
        dispatcher.register_fn(hook_name(lang, NodeKind::SimpleType), Self::simple_type);
        dispatcher.register_fn(hook_name(lang, NodeKind::ComplexType), Self::complex_type);
    }
}

fn schema() -> Vec<SchemaNode> {
    let mut party = ComplexType::new("PartyIdentification");
    party.add_element(Element::new("Nm", "Max140Text"));
    party.add_element(Element {
        name: "Ctry".to_string(),
        type_name: "CountryCode".to_string(),
        optional: true,
        doc: Some("Country of residence.".to_string()),
        ..Element::default()
    });

    vec![
        SimpleType::new("Max140Text", "xs:string")
            .with_restriction(Restriction {
                min_length: Some(1),
                max_length: Some(140),
                ..Restriction::default()
            })
            .into(),
        SimpleType::new("CountryCode", "xs:string")
            .with_restriction(Restriction::pattern("[A-Z]{2,2}"))
            .into(),
        SimpleType::new("CreditDebitCode", "xs:string")
            .with_restriction(Restriction::enumeration(["CRDT", "DBIT"]))
            .into(),
        SimpleType::new("DecimalNumber", "xs:decimal").into(),
        SimpleType::list_of("CodeList", "xs:token").into(),
        party.into(),
        Element::new("Document", "PartyIdentification").into(),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let nodes = schema();
    let dispatcher = Dispatcher::new().with_backend(&RustBackend);

    let generator = Generator::builder()
        .language_name("Rust")?
        .package("payments")
        .header("// Code generated by xsdgen. DO NOT EDIT.")
        .build()?;

    let report = generator.run(&nodes, &dispatcher);
    println!("{}", generator.render(&report));
    println!(
        "handled={} skipped={} failed={}",
        report.handled,
        report.skipped,
        report.failure_count()
    );

    // Built-in spellings for every target.
    for lang in [Language::Go, Language::TypeScript, Language::C, Language::Java] {
        println!("decimal in {lang}: {}", resolve_type("xs:decimal", &nodes, lang).type_name());
    }

    let facets: HashMap<String, String> = [
        ("maxLength", "140"),
        ("minLength", "1"),
        ("pattern", "[A-Z]{2,2}"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for pair in to_sorted_pairs(&facets) {
        println!("{} = {}", pair.key, pair.value);
    }

    Ok(())
}
