//! Output formatting module

use mitsumori_domain::model::{CustomerRecord, EstimateResult, Prefecture};
use mitsumori_types::{OutputFormat, Result};

pub fn output_result(output_format: OutputFormat, result: &EstimateResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nEstimate Result");
        println!("===============");
        println!("Distance:        {:.1} km", result.distance_km);
        println!("Total boxes:     {}", result.total_boxes);
        println!("Truck price:     {} yen", result.truck_price_yen);
        println!("Option price:    {} yen", result.option_price_yen);
        println!("---------------");
        println!("Total:           {} yen", result.total_price_yen);
    }

    Ok(())
}

pub fn output_prefectures(
    output_format: OutputFormat,
    prefectures: &[Prefecture],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(prefectures)?;
        println!("{}", content);
    } else {
        println!("\nPrefectures");
        println!("===========");
        for prefecture in prefectures {
            println!("{}  {}", prefecture.prefecture_id, prefecture.prefecture_name);
        }
        println!("\n{} prefectures registered", prefectures.len());
    }

    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[CustomerRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(records)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRecorded Requests");
    println!("=================");
    if records.is_empty() {
        println!("(none)");
        return Ok(());
    }

    for record in records {
        let total = record
            .result
            .as_ref()
            .map(|r| format!("{} yen", r.total_price_yen))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<5} {:<12} {} -> {}  {}  [{}]",
            record.customer_id,
            record.customer.customer_name,
            record.customer.old_prefecture_id,
            record.customer.new_prefecture_id,
            total,
            record.requested_at.format("%Y-%m-%d %H:%M"),
        );
    }

    Ok(())
}
