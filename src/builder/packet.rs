use crate::common::metadata::Channel;

// Packetizer
//------------------------------------------------------------------------------

/// Splits a payload into consecutive packets of at most `max_packet_size`
/// bytes. The last packet may be shorter; no byte is dropped or reordered.
pub(crate) fn split_packets(payload: &[u8], max_packet_size: usize) -> Vec<&[u8]> {
    debug_assert!(max_packet_size > 0, "Packet size must be positive");

    payload.chunks(max_packet_size).collect()
}

/// Splits one packet into exactly three contiguous channel chunks, in channel
/// order. Chunk lengths differ by at most one byte, with the remainder
/// assigned to the earlier chunks; trailing chunks may be empty for packets
/// shorter than 3 bytes.
pub(crate) fn split_channels(packet: &[u8]) -> [&[u8]; 3] {
    let n = Channel::ALL.len();
    let (base, rem) = (packet.len() / n, packet.len() % n);

    let mut chunks = [&packet[0..0]; 3];
    let mut start = 0;
    for (i, chunk) in chunks.iter_mut().enumerate() {
        let end = start + base + usize::from(i < rem);
        *chunk = &packet[start..end];
        start = end;
    }
    chunks
}
