use std::io;

use iri_descent::IriRef;

fn main() {
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = io::stdin()
            .read_line(&mut buf)
            .expect("failed to read line");
        if n == 0 {
            break;
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        match IriRef::parse(buf.as_str()) {
            Ok(r) => {
                println!("{r:#?}");
                if let Some(auth) = r.authority() {
                    println!("host: {:?}", auth.host_parsed());
                }
            }
            Err(e) => println!("Error: {e}"),
        };
    }
}
