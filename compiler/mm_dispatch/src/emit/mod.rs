//! Emitted source.
//!
//! The dispatcher is specialized as a table of closures, not generated
//! code, but it renders as the straight-line source it is equivalent to:
//! one `is_match` per node, the nested `select_thunk` decision tree, one
//! thunk per node listing its method sequence, and the `dispatch` routine.
//! The text is deterministic and meant for debugging.

mod emitter;

use mm_lattice::NodeId;
use mm_predicate::ensure_sufficient_stack;

use crate::analysis::{Analysis, MethodSequence, Route};
use crate::select::Selector;

use emitter::SourceEmitter;

/// Prefix of every emitted `is_match` function.
const IS_MATCH: &str = "is_matchː";
/// Prefix of every emitted thunk.
const THUNK: &str = "thunkː";

/// Dispatcher-level settings that change the emitted `dispatch` routine.
pub(crate) struct SourceSettings<'a> {
    pub(crate) name: &'a str,
    pub(crate) strict_async: bool,
    pub(crate) has_unhandled: bool,
}

pub(crate) fn emit_source<A, R>(
    analysis: &Analysis<A, R>,
    selector: &Selector,
    settings: &SourceSettings<'_>,
) -> String {
    let _span = tracing::debug_span!("emit", name = settings.name).entered();
    let diagram = &analysis.diagram;
    let mut out = SourceEmitter::with_capacity(256 * diagram.len());

    out.line(
        0,
        &format!(
            "// Multimethod `{}`: {} predicates, {} synthetic.",
            settings.name,
            diagram.principal_count(),
            analysis.conflicts.predicates.len()
        ),
    );

    for (id, _) in diagram.nodes().skip(1) {
        out.blank_line();
        emit_is_match(&mut out, selector, &analysis.sequences[id.index()], id);
    }

    out.blank_line();
    out.line(0, "fn select_thunk(discriminant: &str) -> Thunk {");
    emit_children(&mut out, analysis, selector, diagram.root(), 1);
    out.line(1, &thunk_name(&analysis.sequences[diagram.root().index()]));
    out.line(0, "}");

    for sequence in &analysis.sequences {
        out.blank_line();
        emit_thunk(&mut out, analysis, sequence);
    }

    out.blank_line();
    emit_dispatch(&mut out, settings);
    out.finish()
}

fn thunk_name(sequence: &MethodSequence) -> String {
    format!("{THUNK}{}", sequence.identifier())
}

fn emit_is_match(out: &mut SourceEmitter, selector: &Selector, sequence: &MethodSequence, id: NodeId) {
    out.line(
        0,
        &format!("fn {IS_MATCH}{}(discriminant: &str) -> bool {{", sequence.identifier()),
    );
    out.line(1, &format!("// {}", sequence.predicate()));
    match selector.matcher(id).as_regex_str() {
        Some(regex) => out.line(1, &format!("regex!(r\"{regex}\").is_match(discriminant)")),
        None => out.line(1, "false"),
    }
    out.line(0, "}");
}

/// The decision tree below `node`, mirroring the diagram.
fn emit_children<A, R>(
    out: &mut SourceEmitter,
    analysis: &Analysis<A, R>,
    selector: &Selector,
    node: NodeId,
    level: usize,
) {
    ensure_sufficient_stack(|| {
        for &child in selector.children(node) {
            let sequence = &analysis.sequences[child.index()];
            let test = format!("if {IS_MATCH}{}(discriminant)", sequence.identifier());
            if selector.children(child).is_empty() {
                out.line(level, &format!("{test} {{ return {}; }}", thunk_name(sequence)));
                continue;
            }
            out.line(level, &format!("{test} {{"));
            emit_children(out, analysis, selector, child, level + 1);
            out.line(level + 1, &format!("return {};", thunk_name(sequence)));
            out.line(level, "}");
        }
    });
}

fn emit_thunk<A, R>(out: &mut SourceEmitter, analysis: &Analysis<A, R>, sequence: &MethodSequence) {
    out.line(
        0,
        &format!(
            "fn {}(discriminant: &str, args: &Args) -> Outcome {{",
            thunk_name(sequence)
        ),
    );
    for (index, (route, identifier)) in sequence
        .routes
        .iter()
        .zip(sequence.identifiers())
        .enumerate()
    {
        let detail = match route {
            Route::Method { rule, meta, .. } => {
                let kind = if *meta { "meta" } else { "ordinary" };
                let source = analysis.table.rules[*rule].predicate.source();
                format!("{kind} from {source}")
            }
            Route::Ambiguous { fallbacks, .. } => format!("fails, fallbacks: {fallbacks}"),
        };
        out.line(1, &format!("// {index}: {identifier} [{detail}]"));
    }
    match sequence.entry_point() {
        Some(entry) => out.line(1, &format!("run({entry}, discriminant, args)")),
        None => out.line(1, "Outcome::Continue"),
    }
    out.line(0, "}");
}

fn emit_dispatch(out: &mut SourceEmitter, settings: &SourceSettings<'_>) {
    out.line(
        0,
        &format!(
            "pub fn {}(args: &Args) -> Result<R, DispatchError> {{",
            settings.name
        ),
    );
    out.line(1, "let discriminant = to_discriminant(args)?;");
    out.line(1, "let execute_route = select_thunk(&discriminant);");
    out.line(1, "let result = match execute_route(&discriminant, args)? {");
    out.line(2, "Outcome::Value(result) => result,");
    if settings.has_unhandled {
        out.line(2, "Outcome::Continue => unhandled(args, &discriminant)?,");
    } else {
        out.line(
            2,
            "Outcome::Continue => return Err(DispatchError::Unhandled { discriminant }),",
        );
    }
    out.line(1, "};");
    if settings.strict_async {
        out.line(1, "if !is_promise_like(&result) {");
        out.line(2, "return Err(DispatchError::InvalidResult { discriminant });");
        out.line(1, "}");
    }
    out.line(1, "Ok(result)");
    out.line(0, "}");
}
