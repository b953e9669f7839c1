// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt assembly for content generation.

use crate::brief::Brief;

/// Build the generation prompt for a brief.
///
/// String values are substituted verbatim, absent or null fields render as
/// empty strings. The same brief always produces the same prompt.
pub fn build_prompt(brief: &Brief) -> String {
    let platform = brief.field("platform");

    format!(
        "Anda adalah AI Generator Konten Pemasaran Cerdas.\n\
         Tolong buatkan konten pemasaran berdasarkan detail berikut:\n\
         \n\
         1.  Tujuan Utama Konten: {tujuan}\n\
         2.  Target Audiens: {audiens}\n\
         3.  Produk/Layanan: {produk}\n\
         4.  Keunggulan Utama (USP): {usp}\n\
         5.  Platform & Jenis Konten: {platform}\n\
         6.  Nada Suara: {nada_suara}\n\
         7.  Poin Kunci (Wajib Ada): {poin_kunci}\n\
         8.  Call to Action (CTA): {cta}\n\
         \n\
         Harap berikan {platform} yang relevan dan efektif berdasarkan semua informasi di atas. \
         Berikan 3 opsi jika memungkinkan.\n",
        tujuan = brief.field("tujuan"),
        audiens = brief.field("audiens"),
        produk = brief.field("produk"),
        usp = brief.field("usp"),
        platform = platform,
        nada_suara = brief.field("nada_suara"),
        poin_kunci = brief.field("poin_kunci"),
        cta = brief.field("cta"),
    )
}
