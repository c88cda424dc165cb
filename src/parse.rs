//! Parse pest pairs into a draw command

use miette::SourceSpan;
use pest::Parser;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::Pair;

use crate::ast::DrawCommand;
use crate::errors::{ParseError, SourceContext};
use crate::types::{MeasureKey, Measures, UnknownMeasureKey};
use crate::{Rule, ShaperParser};

/// Parse a command such as `Draw a square with side length 100`.
pub fn parse(source: &str) -> Result<DrawCommand, ParseError> {
    parse_named("<input>", source)
}

/// Like [`parse`], naming the source in diagnostics (e.g. a file path).
pub fn parse_named(name: &str, source: &str) -> Result<DrawCommand, ParseError> {
    let ctx = SourceContext::new(name, source);
    let pairs = ShaperParser::parse(Rule::program, source)
        .map_err(|e| syntax_error(&ctx, e))?;

    let command = pairs
        .flat_map(|program| program.into_inner())
        .find(|pair| pair.as_rule() == Rule::command)
        .ok_or_else(|| ParseError::Syntax {
            src: ctx.named_source(),
            span: (0, source.len()).into(),
            expected: "a draw command".to_string(),
        })?;

    parse_command(&ctx, command)
}

fn parse_command(ctx: &SourceContext, pair: Pair<Rule>) -> Result<DrawCommand, ParseError> {
    let mut shape = String::new();
    let mut measures = Measures::new();
    let mut angle = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::shape_name => shape = parse_shape_name(inner),
            Rule::clause_list => {
                for clause in inner.into_inner() {
                    parse_clause(ctx, clause, &mut measures, &mut angle)?;
                }
            }
            // draw / with / article keywords carry no data
            _ => {}
        }
    }

    Ok(DrawCommand {
        shape,
        measures,
        angle,
    })
}

fn parse_shape_name(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .filter(|word| word.as_rule() == Rule::word)
        .map(|word| word.as_str().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_clause(
    ctx: &SourceContext,
    pair: Pair<Rule>,
    measures: &mut Measures,
    angle: &mut Option<f64>,
) -> Result<(), ParseError> {
    let mut key = None;
    let mut is_angle = false;
    let mut value = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::measure_key => key = Some(measure_key(ctx, &part)?),
            Rule::angle_key => is_angle = true,
            Rule::number => value = Some((parse_number(ctx, &part)?, span_of(&part))),
            _ => {}
        }
    }

    let Some((value, span)) = value else {
        return Ok(());
    };

    if is_angle {
        *angle = Some(value);
    } else if let Some(key) = key {
        measures
            .set(key, value)
            .map_err(|error| ParseError::InvalidMeasure {
                error,
                src: ctx.named_source(),
                span,
            })?;
    }
    Ok(())
}

/// Keywords match case-insensitively with any spacing, e.g. `Side   Length`.
fn measure_key(ctx: &SourceContext, pair: &Pair<Rule>) -> Result<MeasureKey, ParseError> {
    let normalized = pair
        .as_str()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    normalized
        .parse()
        .map_err(|e: UnknownMeasureKey| ParseError::Syntax {
            src: ctx.named_source(),
            span: span_of(pair),
            expected: e.to_string(),
        })
}

fn parse_number(ctx: &SourceContext, pair: &Pair<Rule>) -> Result<f64, ParseError> {
    let text = pair.as_str();
    let invalid = |message: String| ParseError::InvalidNumber {
        message,
        src: ctx.named_source(),
        span: span_of(pair),
    };

    let value: f64 = text.parse().map_err(|e| invalid(format!("{e}")))?;
    if !value.is_finite() {
        return Err(invalid(format!("{text} is out of range")));
    }
    Ok(value)
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn syntax_error(ctx: &SourceContext, err: pest::error::Error<Rule>) -> ParseError {
    let span: SourceSpan = match err.location {
        InputLocation::Pos(pos) => (pos, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    };
    let expected = match &err.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let names: Vec<String> = positives.iter().map(|r| describe(*r)).collect();
            format!("expected {}", names.join(" or "))
        }
        ErrorVariant::ParsingError { .. } => "unexpected input".to_string(),
        ErrorVariant::CustomError { message } => message.clone(),
    };
    ParseError::Syntax {
        src: ctx.named_source(),
        span,
        expected,
    }
}

fn describe(rule: Rule) -> String {
    match rule {
        Rule::measure_key | Rule::angle_key => {
            "a measure (radius, side length, width, height or angle)".to_string()
        }
        Rule::number => "a number".to_string(),
        Rule::shape_name | Rule::word => "a shape name".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{other:?}"),
    }
}
