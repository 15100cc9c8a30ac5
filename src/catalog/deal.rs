use crate::schema::{FieldSpec, PipelineSpec};

/// Custom fields created on the `deal` object, in creation order
pub fn deal_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::select(
            "dealType",
            "Tipo de Deal",
            &["Purchase", "Sale", "Rental", "Property Management"],
        )
        .required(),
        FieldSpec::text("propertyId", "Property ID").description("Reference to property in catalog"),
        FieldSpec::text("propertyAddress", "Dirección Propiedad"),
        FieldSpec::currency("askingPrice", "Precio de Salida", "EUR"),
        FieldSpec::currency("offerPrice", "Precio Ofertado", "EUR"),
        FieldSpec::currency("finalPrice", "Precio Final", "EUR").description("Actual closing price"),
        FieldSpec::currency("commission", "Comisión", "EUR"),
        FieldSpec::number("commissionPercentage", "% Comisión")
            .range(0, 100)
            .suffix("%"),
        FieldSpec::select("dealPriority", "Prioridad", &["Low", "Medium", "High", "Critical"])
            .default_value("Medium"),
        FieldSpec::select(
            "lostReason",
            "Motivo Pérdida",
            &[
                "Price too high",
                "Chose competitor",
                "Financing fell through",
                "Property sold",
                "Client changed mind",
                "No response",
                "Other",
            ],
        ),
    ]
}

/// The sales pipeline, stages listed in progression order
pub fn deal_pipeline() -> PipelineSpec {
    PipelineSpec::new("Sales Pipeline - Anclora")
        .stage("New Lead", 10, "#9CA3AF")
        .stage("Contacted", 20, "#3B82F6")
        .stage("Qualified", 40, "#8B5CF6")
        .stage("Property Viewing", 60, "#EC4899")
        .stage("Proposal Sent", 70, "#F59E0B")
        .stage("Negotiation", 80, "#EF4444")
        .stage("Won", 100, "#10B981")
        .stage("Lost", 0, "#6B7280")
}
