#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(r) = iri_descent::IriRef::parse(data) else {
        return;
    };
    let mut buf = String::with_capacity(data.len());
    if let Some(s) = r.scheme() {
        buf.push_str(s.as_str());
        buf.push(':');
    }
    if let Some(a) = r.authority() {
        buf.push_str("//");
        let start = buf.len();
        if let Some(ui) = a.userinfo() {
            buf.push_str(ui);
            buf.push('@');
        }
        buf.push_str(a.host());
        if let Some(p) = a.port() {
            buf.push(':');
            buf.push_str(p);
            assert_eq!(p.parse::<u16>().ok(), a.port_to_u16());
        }
        assert_eq!(&buf[start..], a.as_str());
    }
    buf.push_str(r.path().as_str());
    if let Some(q) = r.query() {
        buf.push('?');
        buf.push_str(q);
    }
    if let Some(f) = r.fragment() {
        buf.push('#');
        buf.push_str(f);
    }
    assert_eq!(data, buf);

    let again = iri_descent::IriRef::parse(buf.as_str()).unwrap();
    assert_eq!(format!("{r:?}"), format!("{again:?}"));
});
