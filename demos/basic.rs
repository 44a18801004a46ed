use miniurl::Url;

fn main() {
    // Parse a simple URL
    let mut url = Url::parse("http://foo.com:80/go").expect("Failed to parse URL");

    println!("URL: {url}"); // http://foo.com:80/go
    println!("Scheme: {}", url.scheme); // http
    println!("Host: {}", url.host); // foo.com:80
    println!("Hostname: {}", url.hostname()); // foo.com
    println!("Port: {}", url.port()); // 80
    println!("Path: {}", url.path); // go

    // Fields are plain strings
    url.scheme = "https".to_string();
    url.path = "nogo".to_string();
    println!("Edited: {url}"); // https://foo.com:80/nogo

    match Url::parse("foo.com") {
        Ok(url) => println!("Unexpected: {url}"),
        Err(err) => println!("Error: {err}"), // missing scheme
    }
}
