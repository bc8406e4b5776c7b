//! Built-in converter for protodef-style protocol documents.
//!
//! Every named type becomes an `export type <name> = <type>;` block, grouped by
//! `// <state>.<direction>` headers and separated by blank lines. Only
//! `packet_*` declarations are reported in the location index, keyed without
//! the prefix.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use super::traits::ConversionService;

const INDENT: &str = "  ";

lazy_static! {
    static ref PACKET_DECL_RE: Regex =
        Regex::new(r"^export type packet_(\w+) =").expect("packet declaration regex");
}

pub struct BuiltinConverter;

#[async_trait]
impl ConversionService for BuiltinConverter {
    fn id(&self) -> &str {
        "builtin"
    }

    async fn generate(&self, raw_definition: &str) -> Result<String> {
        let document: Value =
            serde_json::from_str(raw_definition).context("parse protocol definition json")?;
        render_document(&document)
    }

    async fn extract_locations(&self, source_text: &str) -> Result<String> {
        serde_json::to_string(&scan_declarations(source_text)).context("encode locations")
    }
}

pub fn render_document(document: &Value) -> Result<String> {
    let Some(root) = document.as_object() else {
        bail!("protocol definition must be a JSON object");
    };

    let mut out = String::new();
    if let Some(types) = root.get("types").and_then(Value::as_object) {
        render_section(&mut out, "types", types);
    }

    for (state, directions) in root {
        if state == "types" {
            continue;
        }
        let Some(directions) = directions.as_object() else {
            continue;
        };
        for (direction, body) in directions {
            if let Some(types) = body.get("types").and_then(Value::as_object) {
                render_section(&mut out, &format!("{state}.{direction}"), types);
            }
        }
    }

    Ok(out)
}

fn render_section(out: &mut String, header: &str, types: &Map<String, Value>) {
    if types.is_empty() {
        return;
    }
    out.push_str("// ");
    out.push_str(header);
    out.push_str("\n\n");
    for (name, ty) in types {
        out.push_str("export type ");
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(&render_type(ty, 0));
        out.push_str(";\n\n");
    }
}

fn render_type(ty: &Value, depth: usize) -> String {
    match ty {
        Value::String(name) => name.clone(),
        Value::Array(parts) => match parts.as_slice() {
            [Value::String(kind), args] => render_compound(kind, args, depth),
            _ => ty.to_string(),
        },
        other => other.to_string(),
    }
}

fn render_compound(kind: &str, args: &Value, depth: usize) -> String {
    match kind {
        "container" => {
            let fields = args
                .as_array()
                .map(|fields| {
                    fields
                        .iter()
                        .enumerate()
                        .map(|(idx, field)| {
                            let name = field
                                .get("name")
                                .and_then(Value::as_str)
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("anon{idx}"));
                            let ty = field
                                .get("type")
                                .map(|ty| render_type(ty, depth + 1))
                                .unwrap_or_else(|| "void".to_string());
                            (name, ty)
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            render_object(&fields, depth)
        }
        "bitfield" => {
            let fields = args
                .as_array()
                .map(|fields| {
                    fields
                        .iter()
                        .filter_map(|field| field.get("name").and_then(Value::as_str))
                        .map(|name| (name.to_string(), "number".to_string()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            render_object(&fields, depth)
        }
        "array" => {
            let item = args
                .get("type")
                .map(|ty| render_type(ty, depth))
                .unwrap_or_else(|| "unknown".to_string());
            format!("Array<{item}>")
        }
        "option" => format!("{} | undefined", render_type(args, depth)),
        "switch" => {
            let mut variants: Vec<String> = Vec::new();
            let cases = args
                .get("fields")
                .and_then(Value::as_object)
                .into_iter()
                .flat_map(|fields| fields.values())
                .chain(args.get("default"));
            for case in cases {
                let rendered = render_type(case, depth);
                if !variants.contains(&rendered) {
                    variants.push(rendered);
                }
            }
            if variants.is_empty() {
                "void".to_string()
            } else {
                variants.join(" | ")
            }
        }
        "mapper" => {
            let literals: Vec<String> = args
                .get("mappings")
                .and_then(Value::as_object)
                .into_iter()
                .flat_map(|mappings| mappings.values())
                .filter_map(Value::as_str)
                .map(|value| format!("\"{value}\""))
                .collect();
            if literals.is_empty() {
                args.get("type")
                    .map(|ty| render_type(ty, depth))
                    .unwrap_or_else(|| "string".to_string())
            } else {
                literals.join(" | ")
            }
        }
        "buffer" => "Buffer".to_string(),
        "pstring" => "string".to_string(),
        other => other.to_string(),
    }
}

fn render_object(fields: &[(String, String)], depth: usize) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let pad = INDENT.repeat(depth);
    let mut out = String::from("{\n");
    for (name, ty) in fields {
        out.push_str(&pad);
        out.push_str(INDENT);
        out.push_str(name);
        out.push_str(": ");
        out.push_str(ty);
        out.push_str(";\n");
    }
    out.push_str(&pad);
    out.push('}');
    out
}

/// Finds every `packet_*` declaration. A declaration runs from its first line to
/// the line before the next blank line.
pub fn scan_declarations(source_text: &str) -> Vec<(String, [u32; 4])> {
    let lines: Vec<&str> = source_text.lines().collect();
    let mut entries = Vec::new();

    for (start, line) in lines.iter().enumerate() {
        let Some(caps) = PACKET_DECL_RE.captures(line) else {
            continue;
        };
        let key = caps[1].to_string();
        let end = lines[start..]
            .iter()
            .position(|line| line.trim().is_empty())
            .map(|offset| start + offset - 1)
            .unwrap_or(lines.len() - 1);
        let end_column = lines[end].chars().count();
        entries.push((
            key,
            [start as u32, 0, end as u32, end_column as u32],
        ));
    }

    entries
}
