//! Fixed equity universes and sector index mapping

use std::fmt;
use std::str::FromStr;

/// Equity universe selectable in the gainers/losers panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Universe {
    #[default]
    Nifty50,
    NiftyNext50,
    Sensex,
    BankNifty,
    Midcap100,
    Smallcap250,
}

/// Sector name and its proxy index symbol
pub const SECTORS: [(&str, &str); 10] = [
    ("IT", "^CNXIT"),
    ("Bank", "^NSEBANK"),
    ("Auto", "^CNXAUTO"),
    ("Pharma", "^CNXPHARMA"),
    ("Metal", "^CNXMETAL"),
    ("FMCG", "^CNXFMCG"),
    ("Realty", "^CNXREALTY"),
    ("Energy", "^CNXENERGY"),
    ("Infra", "^CNXINFRA"),
    ("Media", "^CNXMEDIA"),
];

/// Exchange suffix carried by provider equity symbols
pub const NSE_SUFFIX: &str = ".NS";

const NIFTY50: &[&str] = &[
    "RELIANCE.NS", "TCS.NS", "HDFCBANK.NS", "INFY.NS", "HINDUNILVR.NS",
    "ICICIBANK.NS", "KOTAKBANK.NS", "SBIN.NS", "BHARTIARTL.NS", "ITC.NS",
    "LT.NS", "AXISBANK.NS", "ASIANPAINT.NS", "MARUTI.NS", "TITAN.NS",
    "BAJFINANCE.NS", "SUNPHARMA.NS", "WIPRO.NS", "ULTRACEMCO.NS", "NTPC.NS",
    "ONGC.NS", "HCLTECH.NS", "M&M.NS", "POWERGRID.NS", "TATAMOTORS.NS",
    "NESTLEIND.NS", "DIVISLAB.NS", "JSWSTEEL.NS", "TECHM.NS", "HINDALCO.NS",
];

const SENSEX: &[&str] = &[
    "RELIANCE.NS", "TCS.NS", "HDFCBANK.NS", "INFY.NS", "ICICIBANK.NS",
    "HINDUNILVR.NS", "ITC.NS", "SBIN.NS", "BHARTIARTL.NS", "KOTAKBANK.NS",
    "LT.NS", "AXISBANK.NS", "BAJFINANCE.NS", "MARUTI.NS", "ASIANPAINT.NS",
    "SUNPHARMA.NS", "TITAN.NS", "ULTRACEMCO.NS", "NTPC.NS", "M&M.NS",
    "WIPRO.NS", "NESTLEIND.NS", "POWERGRID.NS", "HCLTECH.NS", "TATAMOTORS.NS",
];

const BANKNIFTY: &[&str] = &[
    "HDFCBANK.NS", "ICICIBANK.NS", "KOTAKBANK.NS", "SBIN.NS", "AXISBANK.NS",
    "INDUSINDBK.NS", "BANKBARODA.NS", "PNB.NS", "IDFCFIRSTB.NS", "BANDHANBNK.NS",
];

const NIFTYNEXT50: &[&str] = &[
    "ADANIENT.NS", "ADANIPORTS.NS", "AMBUJACEM.NS", "ATGL.NS", "BAJAJFINSV.NS",
    "BANDHANBNK.NS", "BEL.NS", "BERGEPAINT.NS", "BIOCON.NS", "BOSCHLTD.NS",
    "CIPLA.NS", "COLPAL.NS", "DLF.NS", "GAIL.NS", "GODREJCP.NS",
    "GRASIM.NS", "HAVELLS.NS", "HINDPETRO.NS", "ICICIGI.NS", "INDIGO.NS",
    "INDUSINDBK.NS", "NAUKRI.NS", "NMDC.NS", "PETRONET.NS", "PIDILITIND.NS",
    "PNB.NS", "SBILIFE.NS", "SHREECEM.NS", "SIEMENS.NS", "TORNTPHARM.NS",
    "VEDL.NS", "ZOMATO.NS", "DMART.NS", "HDFCLIFE.NS", "BAJAJHLDNG.NS",
];

const MIDCAP100: &[&str] = &[
    "ABB.NS", "AUBANK.NS", "AUROPHARMA.NS", "BALKRISIND.NS", "BANDHANBNK.NS",
    "BATAINDIA.NS", "BIOCON.NS", "CHOLAFIN.NS", "COFORGE.NS", "CONCOR.NS",
    "CUMMINSIND.NS", "DABUR.NS", "DALBHARAT.NS", "DEEPAKNTR.NS", "ESCORTS.NS",
    "GAIL.NS", "GLENMARK.NS", "GODREJCP.NS", "GODREJPROP.NS", "HAVELLS.NS",
    "HINDPETRO.NS", "ICICIPRULI.NS", "IDFCFIRSTB.NS", "INDHOTEL.NS", "INDUSTOWER.NS",
    "JUBLFOOD.NS", "LICHSGFIN.NS", "LTI.NS", "LUPIN.NS", "MARICO.NS",
    "MCDOWELL-N.NS", "MPHASIS.NS", "MRF.NS", "NAUKRI.NS", "NMDC.NS",
    "OBEROIRLTY.NS", "OFSS.NS", "PAGEIND.NS", "PEL.NS", "PERSISTENT.NS",
    "PETRONET.NS", "PFC.NS", "PIDILITIND.NS", "PIIND.NS", "PNB.NS",
    "RECLTD.NS", "SAIL.NS", "SBICARD.NS", "SBILIFE.NS", "SRF.NS",
];

const SMALLCAP250: &[&str] = &[
    "AAVAS.NS", "ABSLAMC.NS", "ALKEM.NS", "ANGELONE.NS", "APLLTD.NS",
    "ASTRAZEN.NS", "ATUL.NS", "BASF.NS", "BAYERCROP.NS", "BDL.NS",
    "BSOFT.NS", "CANFINHOME.NS", "CDSL.NS", "CENTRALBK.NS", "CHAMBLFERT.NS",
    "CLEAN.NS", "CROMPTON.NS", "CSBBANK.NS", "DCM.NS", "DELTACORP.NS",
    "DIXON.NS", "EMAMILTD.NS", "FEDERALBNK.NS", "FINEORG.NS", "FLUOROCHEM.NS",
    "GESHIP.NS", "GLAXO.NS", "GMMPFAUDLR.NS", "GNFC.NS", "GRINDWELL.NS",
    "GSPL.NS", "GULFOILLUB.NS", "HAPPSTMNDS.NS", "HEG.NS", "HEMIPROP.NS",
    "HONAUT.NS", "IBREALEST.NS", "IDFC.NS", "IEX.NS", "IIFL.NS",
    "INDIANB.NS", "INDIAMART.NS", "IRCON.NS", "IRCTC.NS", "JKCEMENT.NS",
    "JKLAKSHMI.NS", "JMFINANCIL.NS", "JSL.NS", "KAJARIACER.NS", "KEI.NS",
];

impl Universe {
    pub const ALL: [Universe; 6] = [
        Universe::Nifty50,
        Universe::NiftyNext50,
        Universe::Sensex,
        Universe::BankNifty,
        Universe::Midcap100,
        Universe::Smallcap250,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Universe::Nifty50 => "NIFTY50",
            Universe::NiftyNext50 => "NIFTYNEXT50",
            Universe::Sensex => "SENSEX",
            Universe::BankNifty => "BANKNIFTY",
            Universe::Midcap100 => "MIDCAP100",
            Universe::Smallcap250 => "SMALLCAP250",
        }
    }

    /// Provider symbols making up the universe
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Universe::Nifty50 => NIFTY50,
            Universe::NiftyNext50 => NIFTYNEXT50,
            Universe::Sensex => SENSEX,
            Universe::BankNifty => BANKNIFTY,
            Universe::Midcap100 => MIDCAP100,
            Universe::Smallcap250 => SMALLCAP250,
        }
    }

    /// Next universe in selector order, wrapping around
    pub fn next(&self) -> Universe {
        let idx = Self::ALL.iter().position(|u| u == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Parse a universe name, falling back to NIFTY50 for unknown names
    pub fn from_name_or_default(name: &str) -> Universe {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Universe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown universe: {}", s))
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strip the exchange suffix for display
pub fn display_symbol(symbol: &str) -> String {
    symbol.replace(NSE_SUFFIX, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_sizes() {
        assert_eq!(Universe::Nifty50.symbols().len(), 30);
        assert_eq!(Universe::Sensex.symbols().len(), 25);
        assert_eq!(Universe::BankNifty.symbols().len(), 10);
        assert_eq!(Universe::NiftyNext50.symbols().len(), 35);
        assert_eq!(Universe::Midcap100.symbols().len(), 50);
        assert_eq!(Universe::Smallcap250.symbols().len(), 50);
    }

    #[test]
    fn test_unknown_universe_falls_back() {
        assert_eq!(Universe::from_name_or_default("NASDAQ"), Universe::Nifty50);
        assert_eq!(Universe::from_name_or_default("midcap100"), Universe::Midcap100);
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol("M&M.NS"), "M&M");
        assert_eq!(display_symbol("MCDOWELL-N.NS"), "MCDOWELL-N");
    }

    #[test]
    fn test_selector_cycle_visits_all() {
        let mut current = Universe::default();
        for _ in 0..Universe::ALL.len() {
            current = current.next();
        }
        assert_eq!(current, Universe::default());
    }
}
