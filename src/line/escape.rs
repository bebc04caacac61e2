/// Escape unescaped spaces in a measurement, tag, or field identifier.
pub fn escape(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	write_escaped(&mut out, name);
	out
}

/// Append `name` to `out`, prefixing every space with a backslash.
pub fn write_escaped(out: &mut String, name: &str) {
	for ch in name.chars() {
		if ch == ' ' {
			out.push('\\');
		}
		out.push(ch);
	}
}

#[cfg(test)]
mod tests {
	use crate::line::{escape, write_escaped};

	#[test]
	fn escapes_every_space() {
		assert_eq!(escape("a b"), "a\\ b");
		assert_eq!(escape(" lead  double "), "\\ lead\\ \\ double\\ ");
	}

	#[test]
	fn leaves_other_bytes_untouched() {
		assert_eq!(escape(""), "");
		assert_eq!(escape("temp,unit=\"C\""), "temp,unit=\"C\"");
		assert_eq!(escape("température"), "température");
	}

	#[test]
	fn grows_past_historical_fixed_buffer() {
		let name = "ab ".repeat(400);
		let escaped = escape(&name);
		assert_eq!(escaped.len(), name.len() + 400);
		assert!(escaped.ends_with("ab\\ "));
	}

	#[test]
	fn appends_to_existing_buffer() {
		let mut out = String::from("x=");
		write_escaped(&mut out, "{\"k\": 1}");
		assert_eq!(out, "x={\"k\":\\ 1}");
	}
}
