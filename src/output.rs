use crate::lookup::info::InfoRecord;
use colored::Colorize;
use std::io::{self, Write};
use std::net::IpAddr;

/// Labeled info lines in their fixed order; absent fields produce no line.
pub fn record_lines(record: &InfoRecord) -> Vec<String> {
    let fields = [
        ("Hostname", record.hostname.as_deref()),
        ("Organization", record.org.as_deref()),
        ("City", record.city.as_deref()),
        ("Region", record.region.as_deref()),
        ("Country", record.country.as_deref()),
    ];
    fields
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| labeled(label, value)))
        .collect()
}

pub fn print_record(record: &InfoRecord) {
    for line in record_lines(record) {
        println!("{line}");
    }
}

fn labeled(label: &str, value: &str) -> String {
    format!("{}: {}", label, value.bold())
}

pub fn domain_line(host: &str) {
    println!("{}", labeled("Domain", host));
}

pub fn ip_line(ip: IpAddr) {
    println!("{}", labeled("IP", &ip.to_string()));
}

pub fn reverse_dns_line(name: &str) {
    println!("{}", labeled("Reverse DNS", name));
}

pub fn connection_error() {
    println!("{}", "Connection error!".red().bold());
}

pub fn no_info_found(ip: IpAddr) {
    println!(
        "{} {}",
        "No information found for IP".red(),
        ip.to_string().red().bold()
    );
}

pub fn domain_not_found(host: &str) {
    println!("{} {}", "Domain not found".red(), host.red().bold());
}

pub fn no_ips_found(domain: &str) {
    println!("{} {}", "No IPs found for domain".red(), domain.red().bold());
}

pub fn farewell() {
    println!("{}", "\nGoodbye...".bold());
}

pub fn prompt() -> io::Result<()> {
    print!("Enter IP or domain: ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_record_lines_keep_fixed_order() {
        plain();
        let record = InfoRecord {
            country: Some("DE".to_string()),
            city: Some("Berlin".to_string()),
            ..Default::default()
        };
        assert_eq!(record_lines(&record), vec!["City: Berlin", "Country: DE"]);
    }

    #[test]
    fn test_absent_fields_produce_no_lines() {
        plain();
        assert!(record_lines(&InfoRecord::default()).is_empty());
    }

    #[test]
    fn test_full_record_prints_all_five() {
        plain();
        let record = InfoRecord {
            hostname: Some("dns.google".to_string()),
            org: Some("AS15169 Google LLC".to_string()),
            city: Some("Mountain View".to_string()),
            region: Some("California".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        };
        let lines = record_lines(&record);
        assert_eq!(
            lines,
            vec![
                "Hostname: dns.google",
                "Organization: AS15169 Google LLC",
                "City: Mountain View",
                "Region: California",
                "Country: US",
            ]
        );
    }
}
