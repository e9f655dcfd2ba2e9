use pest::Parser;
use pest_derive::Parser;

use crate::error::Error;

#[derive(Parser)]
#[grammar = "src/script.pest"]
pub struct ScriptGrammar;

/// Checks `input` against the well-formed script grammar.
pub fn check(input: &str) -> Result<(), Error> {
    ScriptGrammar::parse(Rule::script, input).map_err(Box::new)?;
    Ok(())
}
