use crate::error::ScanError;
use std::fmt;
use std::str::FromStr;

const BASIC_PORTS: [u16; 13] = [21, 22, 25, 26, 2525, 587, 80, 443, 110, 995, 143, 993, 3306];

const WEB_PORTS: [u16; 37] = [
    21, 22, 23, 25, 26, 2525, 587, // ftp, ssh, telnet, smtp
    43, 53, 67, 68, 69, // whois, dns, tftp
    80, 443, 110, 995, 143, 993, // http, pop3, imap
    123, 137, 138, 139, 161, 162, // ntp, netbios, snmp
    389, 636, 989, 990, 3306, // ldap, ftps, mysql
    2082, 2083, 2086, 2087, 2095, 2096, 2077, 2078, // cpanel
];

/// Named selection of ports to probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Full,
    Basic,
    Web,
}

impl Preset {
    /// Ports to probe, in listed order
    pub fn ports(&self) -> Vec<u16> {
        match self {
            Preset::Full => (1..=u16::MAX).collect(),
            Preset::Basic => BASIC_PORTS.to_vec(),
            Preset::Web => WEB_PORTS.to_vec(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Full => "full",
            Preset::Basic => "basic",
            Preset::Web => "web",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the menu numbers `1`-`3` as well as the preset names.
impl FromStr for Preset {
    type Err = ScanError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "1" | "full" => Ok(Preset::Full),
            "2" | "basic" => Ok(Preset::Basic),
            "3" | "web" => Ok(Preset::Web),
            _ => Err(ScanError::InvalidPreset(selector.trim().to_string())),
        }
    }
}

pub fn build_port_set(preset: Preset) -> Vec<u16> {
    preset.ports()
}
