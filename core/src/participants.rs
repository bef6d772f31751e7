//! Depository participants (brokers) a spreadsheet can be tied to.
//!
//! The backend uses the participant `value` to pick broker-specific charge
//! rules, so values must stay in sync with the server side enum.

/// One selectable broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    /// Identifier sent to the backend as `participant_name`.
    pub value: &'static str,
    /// Display name.
    pub label: &'static str,
    pub icon: &'static str,
}

impl Participant {
    const fn new(value: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { value, label, icon }
    }
}

/// Label shown for participant values missing from [`PARTICIPANTS`].
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Icon shown for participant values missing from [`PARTICIPANTS`].
pub const UNKNOWN_ICON: &str = "❓";

/// Every broker offered in the create dialog, in display order.
pub static PARTICIPANTS: &[Participant] = &[
    Participant::new("zerodha", "Zerodha", "🏦"),
    Participant::new("grow", "Grow", "📈"),
    Participant::new("icici", "ICICI Direct", "🏛️"),
    Participant::new("hdfc", "HDFC Securities", "🏦"),
    Participant::new("kotak", "Kotak Securities", "🏛️"),
    Participant::new("angel_one", "Angel One", "👼"),
    Participant::new("upstox", "Upstox", "📊"),
    Participant::new("five_paisa", "5paisa", "💰"),
    Participant::new("sharekhan", "Sharekhan", "🦁"),
    Participant::new("motilal_oswal", "Motilal Oswal", "📈"),
    Participant::new("edelweiss", "Edelweiss", "🌿"),
    Participant::new("axis", "Axis Securities", "🏛️"),
    Participant::new("sbicap", "SBI Capital", "🏦"),
    Participant::new("india_informs", "India Infoline", "📰"),
    Participant::new("rksv", "RKSV", "📊"),
    Participant::new("samco", "SAMCO", "📈"),
    Participant::new("alice_blue", "Alice Blue", "🔵"),
    Participant::new("finvasia", "Finvasia", "💼"),
    Participant::new("master_trust", "Master Trust", "🤝"),
    Participant::new("iifl", "IIFL Securities", "🏛️"),
    Participant::new("religare", "Religare", "🏥"),
    Participant::new("karvy", "Karvy", "📊"),
    Participant::new("geodisha", "Geodisha", "🌍"),
    Participant::new("bonanza", "Bonanza", "🎰"),
    Participant::new("aditya_birla", "Aditya Birla Capital", "🏢"),
    Participant::new("jm_financial", "JM Financial", "💰"),
    Participant::new("phillip_capital", "Phillip Capital", "🏛️"),
    Participant::new("nirmal_bang", "Nirmal Bang", "📊"),
    Participant::new("prabhudas_lilladher", "Prabhudas Lilladher", "🏛️"),
    Participant::new("smc", "SMC Global", "🌐"),
    Participant::new("yes_securities", "YES Securities", "✅"),
    Participant::new("first_global", "First Global", "🌍"),
    Participant::new("emkay", "Emkay Global", "📈"),
    Participant::new("centrum", "Centrum Broking", "🏛️"),
    Participant::new("elite", "Elite Wealth", "👑"),
    Participant::new("lkp", "LKP Securities", "📊"),
    Participant::new("mirae_asset", "Mirae Asset", "🌅"),
    Participant::new("nomura", "Nomura", "🏛️"),
    Participant::new("ubs", "UBS", "🏛️"),
    Participant::new("credit_suisse", "Credit Suisse", "🏛️"),
    Participant::new("goldman_sachs", "Goldman Sachs", "🏛️"),
    Participant::new("morgan_stanley", "Morgan Stanley", "🏛️"),
    Participant::new("citigroup", "Citigroup", "🏛️"),
    Participant::new("bank_of_america", "Bank of America", "🏛️"),
    Participant::new("jp_morgan", "JP Morgan", "🏛️"),
    Participant::new("deutsche_bank", "Deutsche Bank", "🏛️"),
    Participant::new("barclays", "Barclays", "🏛️"),
    Participant::new("hsbc", "HSBC", "🏛️"),
    Participant::new("standard_chartered", "Standard Chartered", "🏛️"),
    Participant::new("rbl", "RBL Bank", "🏦"),
    Participant::new("idfc", "IDFC Securities", "🏛️"),
    Participant::new("equirus", "Equirus Securities", "🏛️"),
    Participant::new("anand_rathi", "Anand Rathi", "🏛️"),
    Participant::new("spa_securities", "SPA Securities", "🏛️"),
    Participant::new("ventura", "Ventura Securities", "📈"),
    Participant::new("capital_via", "Capital Via", "💼"),
    Participant::new("tata_capital", "Tata Capital", "🏢"),
    Participant::new("bajaj_capital", "Bajaj Capital", "🏢"),
    Participant::new("dhanuka", "Dhanuka", "📊"),
    Participant::new("gepl", "GEPL Capital", "💼"),
    Participant::new("inventure", "Inventure Growth", "📈"),
    Participant::new("krishna_capital", "Krishna Capital", "💰"),
    Participant::new("lkp_securities", "LKP Securities", "📊"),
    Participant::new("mangal_keshav", "Mangal Keshav", "🏛️"),
    Participant::new("marwadi", "Marwadi Shares", "📊"),
    Participant::new("networth", "Networth Stock Broking", "💰"),
    Participant::new("oriental", "Oriental Bank", "🏦"),
    Participant::new("pinc", "PINC Research", "🔍"),
    Participant::new("prime", "Prime Securities", "🏛️"),
    Participant::new("ratnakar", "Ratnakar Bank", "🏦"),
    Participant::new("sbi_capital", "SBI Capital", "🏦"),
    Participant::new("sebi_registered", "SEBI Registered", "📋"),
    Participant::new("tamilnadu", "Tamil Nadu Mercantile", "🏛️"),
    Participant::new("unicon", "Unicon Securities", "🏛️"),
    Participant::new("ventura_securities", "Ventura Securities", "📈"),
    Participant::new("way2wealth", "Way2Wealth", "💰"),
    Participant::new("wealth_desk", "Wealth Desk", "💼"),
    Participant::new("zerodha_broking", "Zerodha Broking", "🏦"),
];

/// Look up a participant by its backend value.
pub fn find(value: &str) -> Option<&'static Participant> {
    PARTICIPANTS.iter().find(|p| p.value == value)
}

pub fn label_for(value: Option<&str>) -> &'static str {
    value.and_then(find).map_or(UNKNOWN_LABEL, |p| p.label)
}

pub fn icon_for(value: Option<&str>) -> &'static str {
    value.and_then(find).map_or(UNKNOWN_ICON, |p| p.icon)
}

/// Case-insensitive filter on label or value, for the searchable picker.
pub fn search(query: &str) -> impl Iterator<Item = &'static Participant> + '_ {
    let query = query.trim().to_lowercase();
    PARTICIPANTS.iter().filter(move |p| {
        query.is_empty()
            || p.label.to_lowercase().contains(&query)
            || p.value.contains(&query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_values_are_unique() {
        let values: HashSet<_> = PARTICIPANTS.iter().map(|p| p.value).collect();
        assert_eq!(values.len(), PARTICIPANTS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(label_for(Some("zerodha")), "Zerodha");
        assert_eq!(icon_for(Some("angel_one")), "👼");
        assert_eq!(label_for(Some("nope")), UNKNOWN_LABEL);
        assert_eq!(icon_for(None), UNKNOWN_ICON);
    }

    #[test]
    fn test_search() {
        let hits: Vec<_> = search("securities").map(|p| p.value).collect();
        assert!(hits.contains(&"hdfc"));
        assert!(hits.contains(&"kotak"));
        assert!(!hits.contains(&"zerodha"));

        assert_eq!(search("").count(), PARTICIPANTS.len());
        assert_eq!(search("ZERODHA").count(), 2);
    }
}
