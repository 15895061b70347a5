//! Interactive prompts driven by the field descriptors in `cost_core::fields`.

use std::io::{BufRead, Write};

use cost_core::errors::{CalcError, CalcResult};
use cost_core::fields::{InputFieldConfig, BATCH_INPUT_FIELDS, PERPIECE_COST_FIELDS, PROFIT_FIELD, QUANTITY_FIELD};
use cost_core::inputs::{parse_amount, BatchInputs, PerPieceInputs};

/// Ask for one field. Blank or unparseable answers count as 0.
fn prompt_field<R: BufRead, W: Write>(input: &mut R, out: &mut W, field: &InputFieldConfig) -> CalcResult<f64> {
    write!(out, "{}: ", field.prompt_label()).map_err(io_error)?;
    out.flush().map_err(io_error)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_error)?;
    Ok(parse_amount(&line))
}

/// Walk the batch form: quantity and totals, then the profit markup.
pub fn collect_batch<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CalcResult<BatchInputs> {
    let mut inputs = BatchInputs::default();
    for field in BATCH_INPUT_FIELDS.into_iter().chain([PROFIT_FIELD]) {
        let value = prompt_field(input, out, &field)?;
        inputs.set_field(field.key, value)?;
    }
    Ok(inputs)
}

/// Walk the per-piece form: costs, profit markup, then the batch quantity.
pub fn collect_per_piece<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CalcResult<PerPieceInputs> {
    let mut inputs = PerPieceInputs::default();
    for field in PERPIECE_COST_FIELDS.into_iter().chain([PROFIT_FIELD, QUANTITY_FIELD]) {
        let value = prompt_field(input, out, &field)?;
        inputs.set_field(field.key, value)?;
    }
    Ok(inputs)
}

fn io_error(e: std::io::Error) -> CalcError {
    CalcError::file_error("prompt", "<terminal>", e.to_string())
}
