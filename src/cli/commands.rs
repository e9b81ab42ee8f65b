//! Subcommand dispatch
//!
//! Each subcommand writes its result to the given output; logs go to stderr
//! through tracing, so stdout carries only results.

use super::args::{BatchArgs, CliArgs, Command, ComputeArgs, PayArgs};
use crate::config::PaymentConfig;
use crate::core::engine;
use crate::core::flow::{PaymentOrder, TaxPaymentFlow};
use crate::core::format::naira;
use crate::core::identifier::{MockVerifier, TaxIdValidator};
use crate::core::settlement::{quote, MockSettlement};
use crate::core::wallet::StaticWallet;
use crate::strategy::create_strategy;
use crate::types::{RegistrationStatus, TaxComputationRequest, TaxError, TaxIdKind};
use rust_decimal::Decimal;
use std::io::Write;
use tracing::debug;

/// Run the parsed command, writing its result to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), TaxError> {
    match &args.command {
        Command::Compute(compute_args) => compute(compute_args, output),
        Command::Batch(batch_args) => batch(batch_args, output),
        Command::ValidateId { id } => validate_id(id, output),
        Command::Quote { amount, asset } => {
            let config = load_config(args)?;
            let quote = quote(*amount, asset, &config)?;
            writeln!(output, "{} = {}", naira(Decimal::from(*amount)), quote)?;
            Ok(())
        }
        Command::Pay(pay_args) => pay(pay_args, &load_config(args)?, output),
    }
}

fn load_config(args: &CliArgs) -> Result<PaymentConfig, TaxError> {
    match &args.config {
        Some(path) => PaymentConfig::load(path),
        None => Ok(PaymentConfig::default()),
    }
}

fn compute(args: &ComputeArgs, output: &mut dyn Write) -> Result<(), TaxError> {
    let request = TaxComputationRequest::new(args.tax_type, args.amount)?;
    let result = engine::compute(&request)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *output, &result)?;
        writeln!(output)?;
        return Ok(());
    }

    writeln!(output, "{}", result.tax_type.description())?;
    for line in &result.breakdown {
        writeln!(output, "  {}", line)?;
    }
    writeln!(output, "Tax due: {}", naira(Decimal::from(result.tax_due)))?;
    Ok(())
}

fn batch(args: &BatchArgs, output: &mut dyn Write) -> Result<(), TaxError> {
    let strategy = create_strategy(args.strategy, Some(args.to_batch_config()));
    debug!(input = %args.input_file.display(), strategy = ?args.strategy, "starting batch");
    strategy.process(&args.input_file, output)
}

fn validate_id(id: &str, output: &mut dyn Write) -> Result<(), TaxError> {
    let verification = TaxIdValidator::new(MockVerifier).validate(id)?;

    let kind = match verification.tax_id.kind() {
        TaxIdKind::Tin => "TIN",
        TaxIdKind::TaxpayerId => "Taxpayer ID",
    };
    let status = match verification.status {
        RegistrationStatus::Active => "Active",
        RegistrationStatus::Pending => "Pending",
    };

    writeln!(output, "Tax ID:   {} ({})", verification.tax_id, kind)?;
    writeln!(output, "Status:   {}", status)?;
    if let Some(name) = &verification.taxpayer_name {
        writeln!(output, "Taxpayer: {}", name)?;
    }
    Ok(())
}

fn pay(args: &PayArgs, config: &PaymentConfig, output: &mut dyn Write) -> Result<(), TaxError> {
    let flow = TaxPaymentFlow::new(
        StaticWallet::new().with_address(args.chain, args.address.as_str()),
        TaxIdValidator::new(MockVerifier),
        MockSettlement::new(config),
        config.clone(),
    );
    let outcome = flow.run(&PaymentOrder {
        chain: args.chain,
        tax_id: args.tax_id.clone(),
        request: TaxComputationRequest::new(args.tax_type, args.amount)?,
        asset: args.asset.clone(),
        signature: args.signature.clone(),
    })?;

    if args.json {
        serde_json::to_writer_pretty(&mut *output, &outcome)?;
        writeln!(output)?;
        return Ok(());
    }

    if let Some(name) = &outcome.verification.taxpayer_name {
        writeln!(output, "Taxpayer: {}", name)?;
    }
    for line in &outcome.computation.breakdown {
        writeln!(output, "  {}", line)?;
    }
    writeln!(output)?;
    writeln!(output, "{}", outcome.receipt)?;
    Ok(())
}
