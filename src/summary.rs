use freight_core::FreightQuote;

/// Result panel markup for a quote.
pub fn summary_html(quote: &FreightQuote) -> String {
    format!(
        "<div class=\"summary\">\
         <div class=\"calculations\">\
         <strong>Calculations:</strong><br>\
         Volume = {:.2} cm³<br>\
         Volume Weight = {:.2} kg<br>\
         Actual Weight = {:.2} kg\
         </div>\
         <p class=\"total\">Total Cost: ${:.2}</p>\
         </div>",
        quote.volume_cm3, quote.volumetric_weight_kg, quote.actual_weight_kg, quote.cost
    )
}
