use crate::schema::FieldSpec;

/// Custom fields created on the `contact` object, in creation order
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        // Lead management
        FieldSpec::select(
            "leadSource",
            "Fuente del Lead",
            &[
                "Website - Contacto General",
                "Website - Property Inquiry",
                "Website - Valuation Request",
                "Website - Consultation",
                "Referral - Client",
                "Referral - Partner",
                "Facebook Ads",
                "Google Ads",
                "LinkedIn",
                "Instagram",
                "Direct Call",
                "Walk-in",
                "Event/Networking",
                "Other",
            ],
        )
        .description("Origin of the lead")
        .required(),
        FieldSpec::number("leadScore", "Lead Score")
            .description("Algorithmic lead scoring (0-100)")
            .range(0, 100)
            .default_value(0),
        FieldSpec::select(
            "leadStatus",
            "Estado del Lead",
            &[
                "new",
                "contacted",
                "qualified",
                "proposal",
                "negotiation",
                "won",
                "lost",
                "nurturing",
            ],
        )
        .default_value("new")
        .required(),
        FieldSpec::select("leadClassification", "Clasificación", &["hot", "warm", "cold"])
            .description("Based on lead scoring algorithm")
            .required(),
        // Property interest
        FieldSpec::multi_select(
            "interestedPropertyType",
            "Tipos de Propiedad Interesados",
            &["Villa", "Apartment", "Penthouse", "Estate/Finca", "Land", "Commercial"],
        ),
        FieldSpec::text("interestedPropertyId", "Property ID Consulted")
            .description("Last property they inquired about"),
        FieldSpec::multi_select(
            "preferredLocations",
            "Ubicaciones Preferidas",
            &[
                "Son Vida",
                "Palma Centro",
                "Paseo Marítimo",
                "Port d'Andratx",
                "Valldemossa",
                "Deià",
                "Sóller",
                "Pollensa",
                "Alcúdia",
                "Santa Ponsa",
                "Other",
            ],
        ),
        FieldSpec::select(
            "budgetRange",
            "Rango de Presupuesto",
            &[
                "Under €500K",
                "€500K - €1M",
                "€1M - €2M",
                "€2M - €5M",
                "Over €5M",
                "Not Disclosed",
            ],
        ),
        FieldSpec::select(
            "timeline",
            "Timeline de Compra",
            &[
                "Immediate (0-1 month)",
                "Short-term (1-3 months)",
                "Medium-term (3-6 months)",
                "Long-term (6-12 months)",
                "Exploring (12+ months)",
                "Not Disclosed",
            ],
        ),
        // Client profile
        FieldSpec::select(
            "clientType",
            "Tipo de Cliente",
            &["Buyer", "Seller", "Both", "Investor", "Renter", "Landlord"],
        )
        .required(),
        FieldSpec::text("nationality", "Nacionalidad"),
        FieldSpec::select(
            "language",
            "Idioma Preferido",
            &["Spanish", "English", "German", "French", "Other"],
        )
        .default_value("Spanish"),
        FieldSpec::select(
            "netWorthCategory",
            "Categoría Patrimonial",
            &[
                "HNWI (€1M-€5M)",
                "VHNWI (€5M-€30M)",
                "UHNWI (€30M+)",
                "Not Disclosed",
            ],
        )
        .description("High/Very High/Ultra High Net Worth Individual"),
        // Request information
        FieldSpec::select(
            "requestType",
            "Tipo de Solicitud",
            &[
                "General Inquiry",
                "Property Viewing",
                "Valuation",
                "Consultation",
                "Investment Advice",
                "Property Management",
            ],
        ),
        FieldSpec::long_text("initialMessage", "Mensaje Inicial")
            .description("First message from contact form"),
        FieldSpec::text("propertyToSell", "Propiedad a Vender")
            .description("For valuation/selling requests"),
        // Communication
        FieldSpec::select(
            "preferredContactMethod",
            "Método de Contacto Preferido",
            &["Email", "Phone", "WhatsApp", "Video Call"],
        )
        .default_value("Email"),
        FieldSpec::phone("whatsapp", "WhatsApp"),
        FieldSpec::datetime("lastContactedAt", "Último Contacto")
            .description("Last time we reached out"),
        FieldSpec::datetime("nextFollowUpAt", "Próximo Follow-up"),
        // GDPR & compliance
        FieldSpec::checkbox("gdprConsent", "Consentimiento GDPR")
            .description("Privacy policy accepted")
            .required()
            .default_value(false),
        FieldSpec::checkbox("marketingConsent", "Consentimiento Marketing")
            .description("Accepts marketing communications")
            .default_value(false),
        FieldSpec::text("dataSource", "Data Source")
            .description("Original data capture source/URL"),
    ]
}
