//! The fixed MATSim document layout.
//!
//! Only three attribute values come from the request; everything else is a literal.
//! Rendering is deterministic, so the same request always yields the same bytes.

use matgen_domain::ConfigRequest;
use quick_xml::escape::escape;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;
pub const DOCTYPE: &str =
    r#"<!DOCTYPE config SYSTEM "http://www.matsim.org/files/dtd/config_v2.dtd">"#;

/// How a `<param>` element is closed. Strategy settings have no space before `/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    Spaced,
    Tight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param<'a> {
    pub name: &'static str,
    pub value: &'a str,
    pub closing: Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<'a> {
    Param(Param<'a>),
    ParameterSet { kind: &'static str, params: Vec<Param<'a>> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module<'a> {
    pub name: &'static str,
    pub entries: Vec<Entry<'a>>,
}

const fn param<'a>(name: &'static str, value: &'a str) -> Param<'a> {
    Param { name, value, closing: Closing::Spaced }
}

const fn tight<'a>(name: &'static str, value: &'a str) -> Param<'a> {
    Param { name, value, closing: Closing::Tight }
}

fn set<'a>(kind: &'static str, params: [Param<'a>; 2]) -> Entry<'a> {
    Entry::ParameterSet { kind, params: params.into() }
}

/// The five modules in document order, with the request values substituted.
#[must_use]
pub fn modules(request: &ConfigRequest) -> [Module<'_>; 5] {
    [
        Module {
            name: "network",
            entries: vec![Entry::Param(param("inputNetworkFile", &request.network))],
        },
        Module { name: "plans", entries: vec![Entry::Param(param("inputPlansFile", &request.plans))] },
        Module {
            name: "controler",
            entries: vec![
                Entry::Param(param("outputDirectory", &request.output)),
                Entry::Param(param("firstIteration", "0")),
                Entry::Param(param("lastIteration", "10")),
            ],
        },
        Module {
            name: "planCalcScore",
            entries: vec![
                set(
                    "activityParams",
                    [param("activityType", "h"), param("typicalDuration", "12:00:00")],
                ),
                set(
                    "activityParams",
                    [param("activityType", "w"), param("typicalDuration", "8:00:00")],
                ),
            ],
        },
        Module {
            name: "strategy",
            entries: vec![
                Entry::Param(param("maxAgentPlanMemorySize", "5")),
                set("strategysettings", [tight("strategyName", "BestScore"), tight("weight", "0.9")]),
                set("strategysettings", [tight("strategyName", "ReRoute"), tight("weight", "0.1")]),
            ],
        },
    ]
}

/// Renders the complete document for `request`.
///
/// Attribute values are XML-escaped, so arbitrary path strings still produce a
/// well-formed document.
#[must_use]
pub fn render(request: &ConfigRequest) -> String {
    let mut out = String::with_capacity(1536);
    push_line(&mut out, &[XML_DECLARATION]);
    push_line(&mut out, &[DOCTYPE]);
    push_line(&mut out, &["<config>"]);
    for module in modules(request) {
        push_line(&mut out, &[r#"<module name=""#, module.name, r#"">"#]);
        for entry in &module.entries {
            match entry {
                Entry::Param(p) => push_param(&mut out, p),
                Entry::ParameterSet { kind, params } => {
                    push_line(&mut out, &[r#"<parameterset type=""#, *kind, r#"">"#]);
                    for p in params {
                        push_param(&mut out, p);
                    }
                    push_line(&mut out, &["</parameterset>"]);
                },
            }
        }
        push_line(&mut out, &["</module>"]);
    }
    push_line(&mut out, &["</config>"]);
    out
}

fn push_line(out: &mut String, parts: &[&str]) {
    for part in parts {
        out.push_str(part);
    }
    out.push('\n');
}

fn push_param(out: &mut String, param: &Param<'_>) {
    let close = match param.closing {
        Closing::Spaced => " />",
        Closing::Tight => "/>",
    };
    let value = escape(param.value);
    push_line(out, &[r#"<param name=""#, param.name, r#"" value=""#, value.as_ref(), r#"""#, close]);
}
