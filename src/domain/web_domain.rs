use url::{Host, Url};

/// Reduces a url to its registrable domain, e.g.
/// `https://shop.example.co.uk/path?x=1` becomes `example.co.uk`.
///
/// Urls without a scheme are accepted. Anything that cannot be parsed
/// resolves to an empty string.
pub fn get_registrable_domain(url: &str) -> String {
    let url = url.trim();

    let parsed_url = match Url::parse(url) {
        Ok(parsed_url) if parsed_url.has_host() => parsed_url,
        _ => match Url::parse(&format!("http://{}", url)) {
            Ok(parsed_url) => parsed_url,
            Err(_) => return String::new(),
        },
    };

    match parsed_url.host() {
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.').to_lowercase();
            match psl::domain_str(&host) {
                Some(domain) => domain.to_string(),
                None => host,
            }
        }
        Some(Host::Ipv4(ip)) => ip.to_string(),
        // bracketed so the result parses as a host again
        Some(Host::Ipv6(ip)) => format!("[{}]", ip),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::get_registrable_domain;

    #[test]
    fn registrable_domain_ignores_scheme_subdomain_and_path() {
        assert_eq!(
            get_registrable_domain("https://a.b.example.co.uk/x?y=1"),
            get_registrable_domain("http://example.co.uk")
        );
        assert_eq!(
            get_registrable_domain("https://a.b.example.co.uk/x?y=1"),
            "example.co.uk"
        );
    }

    #[test]
    fn registrable_domain_valid() {
        let urls = [
            "https://www.znaturalfoods.com/products/green-tea-organic",
            "https://dallosell.com/product_detail/organic-green-tea-bag",
            "https://www.verywellfit.com/best-green-teas-5115813#:~:text=Certified%20organic",
            "https://shop.medals.co.uk/running?ref=nav",
            "https://blog.ribbons.com.au",
            "HTTPS://WWW.Healthline.COM/nutrition",
            "sub.example.co.uk/path",
        ];
        let results: Vec<String> = urls.iter().map(|u| get_registrable_domain(u)).collect();

        assert_eq!(
            results,
            vec![
                "znaturalfoods.com",
                "dallosell.com",
                "verywellfit.com",
                "medals.co.uk",
                "ribbons.com.au",
                "healthline.com",
                "example.co.uk",
            ]
        )
    }

    #[test]
    fn registrable_domain_is_idempotent() {
        for url in [
            "https://www.amazon.com/dp/B00FTAYNKE",
            "http://a.b.example.co.uk",
            "medals.co.uk",
            "http://[::1]:8080/page",
            "http://192.168.0.10/medals",
        ] {
            let once = get_registrable_domain(url);
            assert_eq!(get_registrable_domain(&once), once);
        }
    }

    #[test]
    fn registrable_domain_of_ip_host_is_the_ip() {
        assert_eq!(
            get_registrable_domain("http://127.0.0.1:8080/page"),
            "127.0.0.1"
        );
        assert_eq!(get_registrable_domain("http://[::1]:8080/page"), "[::1]");
    }

    #[test]
    fn registrable_domain_invalid() {
        assert_eq!(get_registrable_domain(""), "");
        assert_eq!(get_registrable_domain("not a url"), "");
        assert_eq!(get_registrable_domain("#"), "");
    }
}
