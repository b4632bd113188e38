// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Decoder for the “BITS” transmission: a hexadecimal string expands into a
//! bit sequence (four bits per digit, most significant first) that holds a
//! single outermost packet, possibly followed by zero padding.
//!
//! Fields are read through an explicit bit offset that is threaded through
//! the recursive calls; the bit sequence itself is never mutated.


const VERSION_LEN: usize = 3;
const TYPE_ID_LEN: usize = 3;
const HEADER_LEN: usize = VERSION_LEN + TYPE_ID_LEN;
const LITERAL_GROUP_LEN: usize = 5;
const LENGTH_TYPE_LEN: usize = 1;
const TOTAL_BITS_LEN: usize = 15;
const COUNT_LEN: usize = 11;

const LITERAL_TYPE_ID: u32 = 4;


#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DecodeError {
	#[error("malformed input: {found:?} (column {column}) is not a hexadecimal digit")]
	MalformedInput { column: usize, found: char },

	#[error("truncated packet: {needed} bits needed at offset {offset}, but only {available} remain")]
	TruncatedPacket { offset: usize, needed: usize, available: usize },

	#[error("invalid length type ID {0}")]
	InvalidLengthType(u32),

	#[error("unknown operator type {0}")]
	UnknownOperatorType(u32),

	#[error("operator type {type_id} cannot apply to {children} sub-packet(s)")]
	ArityError { type_id: u32, children: usize },

	#[error("value does not fit in 64 bits")]
	Overflow,
}


/// How an operator packet frames its sub-packets.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) enum Length {
	/// Length type ID `0`: the sub-packets span exactly this many bits.
	TotalBits(u32),
	/// Length type ID `1`: there are exactly this many sub-packets.
	Count(u32),
}

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) enum Packet {
	Literal {
		version: u32,
		value: u64,
		/// Number of 5-bit groups the value was encoded in (leading
		/// all-zero groups are allowed, so this can’t be derived from `value`).
		groups: u32,
	},
	Operator {
		version: u32,
		type_id: u32,
		length: Length,
		children: Vec<Packet>,
	},
}

impl Packet {
	pub(crate) fn version(&self) -> u32 {
		match self {
			Packet::Literal { version, .. } | Packet::Operator { version, .. } => *version,
		}
	}

	pub(crate) fn type_id(&self) -> u32 {
		match self {
			Packet::Literal { .. } => LITERAL_TYPE_ID,
			Packet::Operator { type_id, .. } => *type_id,
		}
	}

	/// Number of bits this packet occupies in its encoding.
	pub(crate) fn bit_len(&self) -> usize {
		match self {
			Packet::Literal { groups, .. } => HEADER_LEN + LITERAL_GROUP_LEN * *groups as usize,
			Packet::Operator { length, children, .. } => {
				let length_len = match length {
					Length::TotalBits(_) => TOTAL_BITS_LEN,
					Length::Count(_) => COUNT_LEN,
				};
				HEADER_LEN + LENGTH_TYPE_LEN + length_len
					+ children.iter().map(Packet::bit_len).sum::<usize>()
			}
		}
	}

	/// Pre-order iterator over this packet and all of its descendants.
	pub(crate) fn packets(&self) -> impl Iterator<Item = &Packet> {
		let mut stack = vec![self];
		std::iter::from_fn(move || {
			let packet = stack.pop()?;
			if let Packet::Operator { children, .. } = packet {
				stack.extend(children.iter().rev());
			}
			Some(packet)
		})
	}

	pub(crate) fn version_sum(&self) -> u64 {
		let children_sum = match self {
			Packet::Literal { .. } => 0,
			Packet::Operator { children, .. } => children.iter().map(Packet::version_sum).sum(),
		};
		children_sum + u64::from(self.version())
	}

	pub(crate) fn value(&self) -> Result<u64, DecodeError> {
		use DecodeError::*;

		let (&type_id, children) = match self {
			Packet::Literal { value, .. } => return Ok(*value),
			Packet::Operator { type_id, children, .. } => (type_id, children),
		};
		let arity_error = || ArityError { type_id, children: children.len() };

		match type_id {
			0..=3 => {
				if children.is_empty() { return Err(arity_error()) }
				let values = children.iter().map(Packet::value);
				let folded = match type_id {
					0 => itertools::process_results(values, |vs| vs.fold(Some(0u64), |acc, v| acc?.checked_add(v)))?,
					1 => itertools::process_results(values, |vs| vs.fold(Some(1u64), |acc, v| acc?.checked_mul(v)))?,
					2 => itertools::process_results(values, |vs| vs.min())?,
					_ => itertools::process_results(values, |vs| vs.max())?,
				};
				folded.ok_or(Overflow)
			}
			5..=7 => {
				let [lhs, rhs] = children.as_slice() else { return Err(arity_error()) };
				let (lhs, rhs) = (lhs.value()?, rhs.value()?);
				Ok(u64::from(match type_id {
					5 => lhs > rhs,
					6 => lhs < rhs,
					_ => lhs == rhs,
				}))
			}
			other => Err(UnknownOperatorType(other)),
		}
	}
}


fn read_field(bits: &[bool], offset: usize, len: usize) -> Result<u32, DecodeError> {
	debug_assert!(len <= 32);
	let field = bits.get(offset..offset + len)
		.ok_or(DecodeError::TruncatedPacket {
			offset,
			needed: len,
			available: bits.len().saturating_sub(offset),
		})?;
	Ok(field.iter().fold(0, |acc, &bit| acc << 1 | u32::from(bit)))
}

/// Decodes the packet that starts at `offset`, returning it along with
/// the number of bits it occupies.
fn decode_at(bits: &[bool], offset: usize) -> Result<(Packet, usize), DecodeError> {
	let version = read_field(bits, offset, VERSION_LEN)?;
	let type_id = read_field(bits, offset + VERSION_LEN, TYPE_ID_LEN)?;
	let mut cursor = offset + HEADER_LEN;

	if type_id == LITERAL_TYPE_ID {
		let (mut value, mut groups) = (0u64, 0);
		loop {
			let group = read_field(bits, cursor, LITERAL_GROUP_LEN)?;
			cursor += LITERAL_GROUP_LEN;
			groups += 1;
			if value.leading_zeros() < 4 { return Err(DecodeError::Overflow) }
			value = value << 4 | u64::from(group & 0b1111);
			if group & 0b10000 == 0 { break }
		}
		return Ok((Packet::Literal { version, value, groups }, cursor - offset))
	}

	let length_type = read_field(bits, cursor, LENGTH_TYPE_LEN)?;
	cursor += LENGTH_TYPE_LEN;
	let mut children = Vec::new();
	let length = match length_type {
		0 => {
			let total_bits = read_field(bits, cursor, TOTAL_BITS_LEN)?;
			cursor += TOTAL_BITS_LEN;
			let end = cursor + total_bits as usize;
			if end > bits.len() {
				return Err(DecodeError::TruncatedPacket {
					offset: cursor,
					needed: total_bits as usize,
					available: bits.len() - cursor,
				})
			}
			// Children can’t read past the region their parent declared
			let region = &bits[..end];
			while cursor < end {
				let (child, len) = decode_at(region, cursor)?;
				cursor += len;
				children.push(child);
			}
			Length::TotalBits(total_bits)
		}
		1 => {
			let count = read_field(bits, cursor, COUNT_LEN)?;
			cursor += COUNT_LEN;
			children.reserve(count as usize);
			for _ in 0..count {
				let (child, len) = decode_at(bits, cursor)?;
				cursor += len;
				children.push(child);
			}
			Length::Count(count)
		}
		other => return Err(DecodeError::InvalidLengthType(other)),
	};

	Ok((Packet::Operator { version, type_id, length, children }, cursor - offset))
}

/// Decodes the outermost packet; trailing (padding) bits are left unread.
pub(crate) fn decode(bits: &[bool]) -> Result<(Packet, usize), DecodeError> {
	let (packet, len) = decode_at(bits, 0)?;
	debug_assert_eq!(packet.bit_len(), len);
	tracing::debug!(
		version = packet.version(),
		type_id = packet.type_id(),
		bits = len,
		packets = packet.packets().count(),
		padding = bits.len() - len,
		"decoded outermost packet");
	Ok((packet, len))
}


fn input_packet_from_str(s: &str) -> Result<Packet, DecodeError> {
	let bits = parsing::try_bits_from_str(s)?;
	decode(&bits).map(|(packet, _)| packet)
}


fn part1_impl(input_packet: &Packet) -> u64 {
	input_packet.version_sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, DecodeError> {
	input_packet_from_str(input).map(|p| part1_impl(&p))
}


fn part2_impl(input_packet: &Packet) -> Result<u64, DecodeError> {
	input_packet.value()
}

pub(crate) fn part2(input: &str) -> Result<u64, DecodeError> {
	part2_impl(&input_packet_from_str(input)?)
}


mod parsing {
	use super::DecodeError;

	/// Expands (case-insensitive) hexadecimal digits into bits, most significant first.
	pub(super) fn try_bits_from_str(s: &str) -> Result<Vec<bool>, DecodeError> {
		let s = s.trim();
		let mut bits = Vec::with_capacity(s.len() * 4);
		for (c, chr) in s.chars().enumerate() {
			let digit = chr.to_digit(16)
				.ok_or(DecodeError::MalformedInput { column: c + 1, found: chr })?;
			bits.extend((0..4).rev().map(|i| digit >> i & 1 == 1));
		}
		Ok(bits)
	}

	#[test]
	fn tests() {
		assert_eq!(try_bits_from_str("a").unwrap(), [true, false, true, false]);
		assert_eq!(try_bits_from_str(" 1F\n").unwrap(),
			[false, false, false, true, true, true, true, true]);
		assert_eq!(try_bits_from_str("D2FE2G"),
			Err(DecodeError::MalformedInput { column: 6, found: 'G' }));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn decode_hex(s: &str) -> Result<(Packet, usize), DecodeError> {
		decode(&parsing::try_bits_from_str(s)?)
	}

	fn push_field(bits: &mut Vec<bool>, value: u64, len: usize) {
		bits.extend((0..len).rev().map(|i| value >> i & 1 == 1));
	}

	fn encode(packet: &Packet, bits: &mut Vec<bool>) {
		push_field(bits, packet.version().into(), VERSION_LEN);
		push_field(bits, packet.type_id().into(), TYPE_ID_LEN);
		match packet {
			&Packet::Literal { value, groups, .. } => for g in (0..groups).rev() {
				push_field(bits, u64::from(g > 0), 1);
				push_field(bits, value.checked_shr(4 * g).unwrap_or(0) & 0b1111, 4);
			}
			Packet::Operator { length, children, .. } => {
				match *length {
					Length::TotalBits(n) => { push_field(bits, 0, 1); push_field(bits, n.into(), TOTAL_BITS_LEN) }
					Length::Count(n) => { push_field(bits, 1, 1); push_field(bits, n.into(), COUNT_LEN) }
				}
				for child in children { encode(child, bits) }
			}
		}
	}

	fn literal(version: u32, value: u64) -> Packet {
		let groups = ((64 - value.leading_zeros() + 3) / 4).max(1);
		Packet::Literal { version, value, groups }
	}

	fn operator(version: u32, type_id: u32, count: bool, children: Vec<Packet>) -> Packet {
		let length = if count {
			Length::Count(children.len() as u32)
		} else {
			Length::TotalBits(children.iter().map(Packet::bit_len).sum::<usize>() as u32)
		};
		Packet::Operator { version, type_id, length, children }
	}

	#[test]
	fn scenarios() {
		let (packet, len) = decode_hex("D2FE28").unwrap();
		assert_eq!(packet, Packet::Literal { version: 6, value: 2021, groups: 3 });
		assert_eq!(len, 21);

		let (packet, len) = decode_hex("38006F45291200").unwrap();
		let Packet::Operator { version: 1, type_id: 6, length: Length::TotalBits(27), children } = &packet else {
			panic!("unexpected packet {packet:?}")
		};
		assert_eq!(children.iter().map(|c| c.value().unwrap()).collect::<Vec<_>>(), [10, 20]);
		assert_eq!(len, 49);
		assert_eq!(len, packet.bit_len());

		let (packet, len) = decode_hex("EE00D40C823060").unwrap();
		let Packet::Operator { version: 7, type_id: 3, length: Length::Count(3), children } = &packet else {
			panic!("unexpected packet {packet:?}")
		};
		assert_eq!(children.iter().map(|c| c.value().unwrap()).collect::<Vec<_>>(), [1, 2, 3]);
		assert_eq!(len, 51);
		assert_eq!(len, packet.bit_len());
	}

	#[test]
	fn sub_packet_framing() {
		let (packet, _) = decode_hex("8A004A801A8002F478").unwrap();
		for p in packet.packets() {
			match p {
				Packet::Operator { length: Length::TotalBits(n), children, .. } =>
					assert_eq!(children.iter().map(Packet::bit_len).sum::<usize>(), *n as usize),
				Packet::Operator { length: Length::Count(n), children, .. } =>
					assert_eq!(children.len(), *n as usize),
				Packet::Literal { .. } => (),
			}
		}

		let tree = operator(3, 0, false, vec![
			literal(1, 0),
			operator(4, 1, true, vec![literal(2, 7), literal(0, 6), literal(5, 1 << 40)]),
			operator(6, 7, false, vec![literal(7, 15), operator(0, 2, true, vec![literal(1, 15)])]),
		]);
		let mut bits = Vec::new();
		encode(&tree, &mut bits);
		assert_eq!(bits.len(), tree.bit_len());
		bits.extend([false; 5]);
		assert_eq!(decode(&bits).unwrap(), (tree.clone(), tree.bit_len()));
		assert_eq!(tree.value().unwrap(), 42 * (1 << 40) + 1);
	}

	#[test]
	fn literal_round_trip() {
		for value in [0, 1, 15, 16, 2021, u64::from(u32::MAX) + 1, u64::MAX] {
			let packet = literal(5, value);
			let mut bits = Vec::new();
			encode(&packet, &mut bits);
			assert_eq!(decode(&bits).unwrap(), (packet, bits.len()));
		}
		// Leading all-zero groups are kept track of
		let packet = Packet::Literal { version: 0, value: 3, groups: 3 };
		let mut bits = Vec::new();
		encode(&packet, &mut bits);
		assert_eq!(decode(&bits).unwrap().1, 21);
	}

	#[test]
	fn version_sum_order() {
		for hex in ["8A004A801A8002F478", "620080001611562C8802118E34", "A0016C880162017C3686B18A3D4780"] {
			let (packet, _) = decode_hex(hex).unwrap();
			let pre_order = packet.packets().map(|p| u64::from(p.version())).sum::<u64>();
			assert_eq!(pre_order, packet.version_sum());
		}
	}

	#[test]
	fn errors() {
		use DecodeError::*;
		assert_eq!(decode_hex("D2FE"), Err(TruncatedPacket { offset: 16, needed: 5, available: 0 }));
		assert_eq!(decode_hex("3"), Err(TruncatedPacket { offset: 3, needed: 3, available: 1 }));
		// Length type 0 declaring more bits than there are
		assert!(matches!(decode_hex("38006F452912"), Err(TruncatedPacket { offset: 22, needed: 27, .. })));
		// A literal running past its parent’s declared region
		let mut bits = Vec::new();
		encode(&literal(0, 2021), &mut bits);
		let mut parent = Vec::new();
		push_field(&mut parent, 0, VERSION_LEN);
		push_field(&mut parent, 0, TYPE_ID_LEN);
		push_field(&mut parent, 0, 1);
		push_field(&mut parent, bits.len() as u64 - 1, TOTAL_BITS_LEN);
		parent.extend(bits);
		assert!(matches!(decode(&parent), Err(TruncatedPacket { .. })));

		assert_eq!(operator(0, 5, true, vec![literal(0, 1)]).value(),
			Err(ArityError { type_id: 5, children: 1 }));
		assert_eq!(operator(0, 2, true, vec![]).value(),
			Err(ArityError { type_id: 2, children: 0 }));
		assert_eq!(operator(0, 4, true, vec![literal(0, 1)]).value(),
			Err(UnknownOperatorType(4)));
		assert_eq!(operator(0, 1, true, vec![literal(0, u64::MAX), literal(0, 2)]).value(),
			Err(Overflow));
		// Seventeen 4-bit groups of all ones don’t fit
		let mut bits = Vec::new();
		push_field(&mut bits, 0, VERSION_LEN);
		push_field(&mut bits, LITERAL_TYPE_ID.into(), TYPE_ID_LEN);
		for _ in 0..17 { push_field(&mut bits, 0b11111, LITERAL_GROUP_LEN) }
		assert_eq!(decode(&bits), Err(Overflow));
	}

	#[test]
	fn tests() {
		assert_eq!(part1("8A004A801A8002F478").unwrap(), 16);
		assert_eq!(part1("620080001611562C8802118E34").unwrap(), 12);
		assert_eq!(part1("C0015000016115A2E0802F182340").unwrap(), 23);
		assert_eq!(part1("A0016C880162017C3686B18A3D4780").unwrap(), 31);
		assert_eq!(part2("C200B40A82").unwrap(), 3);
		assert_eq!(part2("04005AC33890").unwrap(), 54);
		assert_eq!(part2("880086C3E88112").unwrap(), 7);
		assert_eq!(part2("CE00C43D881120").unwrap(), 9);
		assert_eq!(part2("D8005AC2A8F0").unwrap(), 1);
		assert_eq!(part2("F600BC2D8F").unwrap(), 0);
		assert_eq!(part2("9C005AC2F8F0").unwrap(), 0);
		assert_eq!(part2("9C0141080250320F1802104A08\n").unwrap(), 1);
	}
}
