//! Pre-generated marker code tables for the built-in dictionaries.
//!
//! One `u64` per marker id, inner bits in row-major order with black = 1.
//! Tables are emitted by `tools/gen_codes.py` with a fixed seed; the
//! `DICT_NXN_{50,100,250}` variants are prefixes of the 1000-entry table.

pub(crate) static CODES_4X4_1000: [u64; 1000] = [
    0x0041ed, 0x0029aa, 0x00a8e3, 0x004ce8, 0x009cc9, 0x004656, 0x00071f, 0x00a174,
    0x00ed65, 0x00d5c2, 0x00d11b, 0x0026c0, 0x000fc1, 0x0083ee, 0x0042d7, 0x0068cc,
    0x009fdd, 0x00bcda, 0x005853, 0x00b398, 0x00f9b9, 0x00ac86, 0x00cd8f, 0x003955,
    0x003ef2, 0x001e8b, 0x005370, 0x003ab1, 0x00201e, 0x00007c, 0x00bc0a, 0x0003c3,
    0x006648, 0x0090d4, 0x00a145, 0x009422, 0x004c20, 0x0041a1, 0x0007b7, 0x002fbd,
    0x00273a, 0x00ab33, 0x00c799, 0x008e6f, 0x001a84, 0x002d6b, 0x002491, 0x005c7e,
    0x00d3dc, 0x00fe6a, 0x004ea3, 0x00afa8, 0x003889, 0x00e716, 0x0088df, 0x00c525,
    0x00eedb, 0x00a180, 0x00e381, 0x00bc97, 0x00419a, 0x00ee13, 0x000579, 0x00fd46,
    0x003f4f, 0x0051e4, 0x008115, 0x00fe30, 0x0048de, 0x00f107, 0x00f0ca, 0x002e69,
    0x003f76, 0x00ff94, 0x0020e2, 0x00f561, 0x002aec, 0x000bfa, 0x0057b8, 0x00b359,
    0x00b944, 0x001b90, 0x00e53e, 0x00b463, 0x00ca9f, 0x00cc9b, 0x00dc40, 0x00356e,
    0x007f5d, 0x000e06, 0x00b872, 0x001ac7, 0x00e58a, 0x00abc8, 0x00d0c5, 0x006da2,
    0x00a37b, 0x00d9ce, 0x00cf3d, 0x000a78, 0x00f1ef, 0x00c8eb, 0x00e7ea, 0x00da23,
    0x00b528, 0x00b4a5, 0x006a5b, 0x00d700, 0x00cb01, 0x002e2e, 0x009d0c, 0x005cf9,
    0x0062cf, 0x005095, 0x0087cb, 0x0045f1, 0x000487, 0x00c4bc, 0x00ee88, 0x0065e9,
    0x001d14, 0x00328e, 0x0054f7, 0x00786c, 0x00157a, 0x004c73, 0x007d38, 0x004f26,
    0x0036ab, 0x00cfd1, 0x00fcaa, 0x00bfe3, 0x008e1f, 0x0008c2, 0x0091c0, 0x00a9d7,
    0x004fda, 0x002f53, 0x006f86, 0x008e24, 0x00d855, 0x00ae47, 0x00db7c, 0x000f0a,
    0x0090a1, 0x004435, 0x00646b, 0x00bbd0, 0x0060ad, 0x00ea16, 0x006b34, 0x00e5db,
    0x005fae, 0x00d49a, 0x00b479, 0x00c046, 0x002015, 0x000eb2, 0x009d69, 0x00b8bf,
    0x00de7d, 0x00a2b8, 0x00f0a6, 0x006bf5, 0x00522b, 0x00c690, 0x004641, 0x005d57,
    0x008039, 0x00cba4, 0x0027d5, 0x001131, 0x008336, 0x006954, 0x001a7b, 0x00b821,
    0x00adb3, 0x0053b5, 0x00bea7, 0x009f09, 0x00cf02, 0x00615b, 0x00d4f1, 0x009fbc,
    0x007988, 0x006785, 0x00983b, 0x003bf7, 0x00287a, 0x00d9be, 0x00d6e3, 0x0010d7,
    0x000653, 0x007c48, 0x00dfa1, 0x00d5b7, 0x005a2c, 0x004291, 0x00a46a, 0x008325,
    0x006882, 0x006379, 0x008346, 0x00bf15, 0x009c71, 0x008ede, 0x00f812, 0x002b3e,
    0x00e868, 0x009e72, 0x00917b, 0x004937, 0x0072a5, 0x000d1d, 0x00e9b0, 0x00e062,
    0x0028d9, 0x006ec2, 0x00acee, 0x0077d7, 0x001498, 0x00114e, 0x00d0a8, 0x009b82,
    0x0025ae, 0x004abb, 0x00b19b, 0x00fa18, 0x002f31, 0x009a9e, 0x00c2ac, 0x0046ef,
    0x00441a, 0x0018af, 0x00b5b9, 0x004ab6, 0x00a152, 0x00a4df, 0x009c34, 0x0096ec,
    0x008451, 0x001063, 0x0053d6, 0x001b19, 0x008b1d, 0x007ecf, 0x00fd3b, 0x00f0f7,
    0x00a938, 0x004874, 0x004865, 0x00d4c2, 0x00a41b, 0x003dc0, 0x001ac1, 0x0072ee,
    0x0045d7, 0x00efcc, 0x005add, 0x009bda, 0x008b53, 0x00aa98, 0x0064b9, 0x007b86,
    0x00308f, 0x007a24, 0x005455, 0x00b18b, 0x002a70, 0x0005b1, 0x00cf1e, 0x004a47,
    0x00477c, 0x0014cd, 0x005b0a, 0x00f6c3, 0x001d48, 0x00dda9, 0x00cdb6, 0x0072ff,
    0x00b7d4, 0x007c45, 0x001322, 0x003afb, 0x00e320, 0x00cca1, 0x00d74e, 0x008ab7,
    0x002b2c, 0x006abd, 0x00863a, 0x005e33, 0x00dbf8, 0x00b299, 0x004be6, 0x00716f,
    0x00c035, 0x001452, 0x00406b, 0x0067d0, 0x006f91, 0x008b7e, 0x000727, 0x009adc,
    0x005cad, 0x001d6a, 0x00c1a3, 0x00e6a8, 0x00e389, 0x00f616, 0x002bdf, 0x005734,
    0x002025, 0x00c1db, 0x00b880, 0x00ee81, 0x00ebae, 0x00bf97, 0x00968c, 0x00ea9d,
    0x00209a, 0x002113, 0x003d58, 0x007079, 0x00cc46, 0x00a24f, 0x00b8e4, 0x009c15,
    0x00dab2, 0x00bf4b, 0x00d530, 0x004971, 0x00b407, 0x001e3c, 0x00148d, 0x008fca,
    0x007c83, 0x00e008, 0x005969, 0x00ce76, 0x00d4bf, 0x002694, 0x003405, 0x009fe2,
    0x0038bb, 0x00bde0, 0x008061, 0x00b00e, 0x00e477, 0x0031ec, 0x00da7d, 0x006afa,
    0x00d3f3, 0x00ceb8, 0x009e59, 0x00fca6, 0x00c32f, 0x00a044, 0x00e7f5, 0x005112,
    0x002e2b, 0x007290, 0x009351, 0x00143e, 0x0050e7, 0x00d19c, 0x003c6d, 0x00b22a,
    0x002763, 0x000968, 0x003f49, 0x0056d6, 0x006d9f, 0x0025f4, 0x00b7e5, 0x00ee42,
    0x009f9b, 0x00f340, 0x00246e, 0x00f957, 0x00fd4c, 0x003a5d, 0x00655a, 0x0076d3,
    0x009018, 0x003c39, 0x00dd06, 0x00d40f, 0x00b7a4, 0x00a3d5, 0x007772, 0x008d0b,
    0x003ff0, 0x004d31, 0x00e09e, 0x00ddc7, 0x00b4fc, 0x00848a, 0x0062c8, 0x009529,
    0x008f36, 0x005554, 0x00eca2, 0x00f67b, 0x0058a0, 0x00f421, 0x0048ce, 0x00fe37,
    0x00f8ac, 0x000a3d, 0x000fba, 0x0009b3, 0x008178, 0x004a19, 0x006d66, 0x00d4ef,
    0x00ff04, 0x00cfb5, 0x004dd2, 0x00dbeb, 0x003d50, 0x007711, 0x005cfe, 0x005aa7,
    0x00c85c, 0x00dc2d, 0x0006ea, 0x004d23, 0x00ec28, 0x005b09, 0x007796, 0x006f5f,
    0x00b4b4, 0x000fa5, 0x009b02, 0x003d5b, 0x00ee00, 0x00d601, 0x001d2e, 0x00f317,
    0x00240c, 0x004a1d, 0x006a1a, 0x008c93, 0x00a2d8, 0x00c7f9, 0x00adc6, 0x00c5cf,
    0x007664, 0x006b95, 0x00d432, 0x001acb, 0x006ab0, 0x0010f1, 0x00895e, 0x00c787,
    0x000bbc, 0x00540d, 0x00394a, 0x00c803, 0x00a588, 0x0090e9, 0x000ff6, 0x00d83f,
    0x004414, 0x00e385, 0x00f962, 0x00743b, 0x00b360, 0x0027e1, 0x00a18e, 0x007f6c,
    0x00747a, 0x00f438, 0x00b5d9, 0x009e26, 0x00a6af, 0x001dc4, 0x007775, 0x000a92,
    0x0049ab, 0x00c810, 0x001ad1, 0x0065be, 0x002467, 0x007f1c, 0x003bed, 0x001baa,
    0x0032e3, 0x008ee8, 0x0036c9, 0x00311f, 0x000374, 0x002765, 0x0007c2, 0x009b1b,
    0x00a8c0, 0x00e9c1, 0x00d5ee, 0x00acd7, 0x000acc, 0x0019dd, 0x002eda, 0x006253,
    0x007598, 0x0013b9, 0x003e86, 0x00778f, 0x00f524, 0x00f355, 0x00f0f2, 0x00688b,
    0x005570, 0x0094b1, 0x00f21e, 0x007147, 0x00227c, 0x0093cd, 0x00ae0a, 0x008dc3,
    0x00a848, 0x004ca9, 0x0050b6, 0x00f2d4, 0x00db45, 0x00c622, 0x00b1fb, 0x00ce20,
    0x001ba1, 0x00ba4e, 0x0071b7, 0x00c62c, 0x00a9bd, 0x00993a, 0x00b533, 0x0026f8,
    0x00e199, 0x008ee6, 0x00386f, 0x00fc84, 0x00df35, 0x008752, 0x00776b, 0x0012d0,
    0x007e91, 0x002e7e, 0x00ae27, 0x00f5dc, 0x005bad, 0x00f06a, 0x00d8a3, 0x00f1a8,
    0x00d289, 0x00f916, 0x00b2df, 0x001234, 0x00ff25, 0x00b8db, 0x002380, 0x00bd81,
    0x004eae, 0x002697, 0x00b18c, 0x00a99d, 0x00b39a, 0x00f813, 0x001f79, 0x008f46,
    0x00e94f, 0x003b15, 0x00cdb2, 0x00764b, 0x00d871, 0x001ade, 0x00db07, 0x00938d,
    0x00e2ca, 0x001383, 0x006b08, 0x00c869, 0x005176, 0x006194, 0x009305, 0x0052e2,
    0x00afbb, 0x00a8e0, 0x00cf61, 0x00930e, 0x00cb77, 0x00ccec, 0x00197d, 0x007dfa,
    0x002af3, 0x0019b8, 0x00cd59, 0x003fa6, 0x008a2f, 0x009b44, 0x0006f5, 0x00c412,
    0x00652b, 0x001d90, 0x00a251, 0x00b73e, 0x002c9c, 0x003b6d, 0x00852a, 0x003e63,
    0x001468, 0x002e49, 0x0059d6, 0x00f49f, 0x00e0f4, 0x0096e5, 0x002142, 0x00969b,
    0x005e40, 0x005141, 0x00876e, 0x006057, 0x00184c, 0x00f95d, 0x00f85a, 0x004dd3,
    0x005b18, 0x00eb39, 0x00a006, 0x001b0f, 0x0032a4, 0x0042d5, 0x00440b, 0x006af0,
    0x00dc31, 0x00039e, 0x008ffc, 0x00534d, 0x00d78a, 0x005943, 0x00edc8, 0x000429,
    0x001236, 0x009054, 0x000ac5, 0x009fa2, 0x006d7b, 0x0043a0, 0x004321, 0x002bce,
    0x00e537, 0x0093ac, 0x00493d, 0x0022ba, 0x0060b3, 0x00cc78, 0x007919, 0x00b066,
    0x009bef, 0x00fa04, 0x00eeb5, 0x00c0d2, 0x0012eb, 0x00e850, 0x008611, 0x0001a7,
    0x00235c, 0x00db2d, 0x00d9ea, 0x006423, 0x00f728, 0x004a09, 0x007a96, 0x00f65f,
    0x006fb4, 0x00eea5, 0x00ce02, 0x00345b, 0x005900, 0x00a501, 0x00802e, 0x005a17,
    0x003f0c, 0x00091d, 0x00fd1a, 0x006393, 0x0076f9, 0x0070c6, 0x00f164, 0x000a95,
    0x00c732, 0x00d1cb, 0x0095b0, 0x009ff1, 0x00ac5e, 0x00ee87, 0x00e6bc, 0x00d30d,
    0x008c4a, 0x005f03, 0x003088, 0x0092f6, 0x007f14, 0x004285, 0x00ac62, 0x00eb3b,
    0x009e60, 0x00848e, 0x001a6c, 0x0038fd, 0x00877a, 0x005673, 0x003f38, 0x00e4d9,
    0x00e126, 0x006daf, 0x0018c4, 0x009675, 0x007d92, 0x0080ab, 0x007310, 0x0029d1,
    0x0008be, 0x00cb67, 0x00da1c, 0x003aed, 0x00eeaa, 0x0049e3, 0x0099e8, 0x0025c9,
    0x005b56, 0x00b81f, 0x00be74, 0x000665, 0x003ac2, 0x00921b, 0x0013c0, 0x00b8c1,
    0x0038ee, 0x0013d7, 0x0025cc, 0x00d8dd, 0x00c1da, 0x003953, 0x004098, 0x00c2b9,
    0x000186, 0x00be8f, 0x007024, 0x009255, 0x00e3f2, 0x001f8b, 0x008070, 0x0023b1,
    0x00151e, 0x009847, 0x00fd7c, 0x0012cd, 0x0024c3, 0x003348, 0x00bba9, 0x00d3b6,
    0x0080ff, 0x002dd4, 0x007922, 0x0028fb, 0x00b920, 0x006aa1, 0x009d4e, 0x0058b7,
    0x00612c, 0x00e8bd, 0x00ac3a, 0x000c33, 0x0071f8, 0x001099, 0x00d1e6, 0x00f784,
    0x00fe35, 0x00fa52, 0x00ae6b, 0x00bdd0, 0x008d91, 0x00d17e, 0x005527, 0x0050dc,
    0x005aad, 0x00c36a, 0x00efa3, 0x00fca8, 0x00c189, 0x00fc16, 0x0039df, 0x00cd34,
    0x00de25, 0x006782, 0x00afdb, 0x008e80, 0x008c81, 0x00b1ae, 0x008d97, 0x00cc8c,
    0x00689d, 0x00469a, 0x00cf13, 0x00ce79, 0x005246, 0x00304f, 0x00aee4, 0x00da15,
    0x00c0b2, 0x002d4b, 0x002b30, 0x003dde, 0x000207, 0x00d43c, 0x00128d, 0x0035ca,
    0x00aa83, 0x00f608, 0x00d476, 0x00e2bf, 0x009c94, 0x00f205, 0x0005e2, 0x0026bb,
    0x0093e0, 0x001e61, 0x00760e, 0x00b277, 0x0067ec, 0x00587d, 0x0090fa, 0x0081f3,
    0x0064b8, 0x00fc59, 0x0082a6, 0x00512f, 0x009644, 0x0025f5, 0x003712, 0x009c2b,
    0x00c890, 0x00b151, 0x005a3e, 0x009ee7, 0x00879c, 0x003a6d, 0x00582a, 0x005563,
    0x001f68, 0x001d49, 0x005cd6, 0x007b9f, 0x009bf4, 0x0075e5, 0x005442, 0x008d9b,
    0x00c940, 0x00ea6e, 0x00c757, 0x00334c, 0x00b85d, 0x008b5a, 0x0024d3, 0x002618,
    0x009a39, 0x006306, 0x00620f, 0x00ada4, 0x00e1d5, 0x005d72, 0x00fb0b, 0x0095f0,
    0x006b31, 0x00269e, 0x002bc7, 0x006afc, 0x00d24d, 0x002a8a, 0x00f043, 0x0078c8,
    0x007329, 0x00047f, 0x00cb54, 0x0069c5, 0x0052a2, 0x00e47b, 0x002ea0, 0x009221,
    0x000ece, 0x00cc37, 0x002eac, 0x00883d, 0x0035ba, 0x00b7b3, 0x001778, 0x00a819,
    0x00f366, 0x0062ef, 0x00f504, 0x000db5, 0x0033d2, 0x0049eb, 0x009350, 0x009511,
    0x00a2fe, 0x00a8a7, 0x007e5c, 0x00da2d, 0x00acea, 0x007b23, 0x003909, 0x007d96,
    0x007d5f, 0x002ab4, 0x00cda5, 0x002b5b, 0x00e32e, 0x00c117, 0x005a0c, 0x00c81d,
    0x00901a, 0x003a93, 0x0038d8, 0x0025f9, 0x0033c6, 0x0053cf, 0x006c64, 0x00ba32,
    0x0088cb, 0x00c0b0, 0x002ef1, 0x00cf5e, 0x001587, 0x00c1bc, 0x00520d, 0x00df4a,
    0x00bb88, 0x006ee9, 0x0015f6, 0x00e63f, 0x00ba14, 0x005f62, 0x00623b, 0x008960,
    0x00c5e1, 0x00a5f7, 0x00b56c, 0x009a7a, 0x00ad73, 0x008a38, 0x0013d9, 0x002426,
    0x0034af, 0x0013c4, 0x00b575, 0x00f092, 0x00b7ab, 0x001e10, 0x0038d1, 0x00abbe,
    0x007267, 0x00351c, 0x0039ed, 0x00c1aa, 0x0060e3, 0x00a4e8, 0x0014c9, 0x005e56,
    0x003f1f, 0x007974, 0x00e565, 0x006dc2, 0x00891b, 0x007ec0, 0x0087c1, 0x009bee,
    0x007ad7, 0x0040cc, 0x0097dd, 0x0054da, 0x001053, 0x000b98, 0x0071b9, 0x00c486,
    0x00058f, 0x00eb24, 0x003155, 0x00d6f2, 0x00d68b, 0x00ab70, 0x00b2b1, 0x00381e,
    0x00bf47, 0x00d87c, 0x0091cd, 0x00540a, 0x00bbc3, 0x00be48, 0x002aa9, 0x0056b6,
];

pub(crate) static CODES_5X5_1000: [u64; 1000] = [
    0x001d31603, 0x001c55b88, 0x000418ee9, 0x00108b5f6, 0x000fb063f, 0x000e45a14, 0x00077c185, 0x00076ff62,
    0x001a6823b, 0x001372960, 0x00118e5e1, 0x00160078e, 0x00146c5f7, 0x001c097fd, 0x000823a7a, 0x000c72a38,
    0x0018c33d9, 0x000aac426, 0x0017154af, 0x001c9b3c4, 0x001b6d575, 0x000219092, 0x00198d7ab, 0x00162be10,
    0x001f558d1, 0x000d54bbe, 0x001a79267, 0x00008d51c, 0x0009259ed, 0x0014761aa, 0x000f180e3, 0x0018344e8,
    0x0004a34c9, 0x00037fe56, 0x001125f1f, 0x000761974, 0x001e70565, 0x001120dc2, 0x000e9a91b, 0x000ae1ec0,
    0x0019ca7c1, 0x001173bee, 0x0002ce0cc, 0x00024b7dd, 0x0014bf4da, 0x000f4ab98, 0x0019a91b9, 0x001236486,
    0x00015258f, 0x001948b24, 0x000175155, 0x001eb76f2, 0x0013ff68b, 0x000744b70, 0x0000dd2b1, 0x000f8d81e,
    0x0006adf47, 0x001e0787c, 0x00066b1cd, 0x00092f40a, 0x000b7dbc3, 0x000d65e48, 0x0005c4aa9, 0x0019ff6b6,
    0x00070a7ff, 0x0009008d4, 0x00116b945, 0x00010cc22, 0x000d04420, 0x0000d204e, 0x000bb5fb7, 0x000ee9c2c,
    0x0010747bd, 0x001df5f3a, 0x001438333, 0x0012e5f99, 0x000a0b4e6, 0x001dbe66f, 0x001939284, 0x001a50d52,
    0x00059056b, 0x00009bc91, 0x000a7147e, 0x001df1c27, 0x001e24bdc, 0x0017579ad, 0x000b4366a, 0x0005e26a3,
    0x00096a7a8, 0x0006fd089, 0x001d89f16, 0x001cde0df, 0x0018a2834, 0x0018b3a82, 0x00129c6db, 0x001759980,
    0x000527b81, 0x001d9b4ae, 0x0012d1497, 0x00006878c, 0x000e0479d, 0x00154799a, 0x000cec613, 0x001ab3e58,
    0x0003f9d79, 0x001bab546, 0x0017d974f, 0x0001ec9e4, 0x0016653b2, 0x0011c044b, 0x001b4f630, 0x0017800de,
    0x001bc4907, 0x001664f3c, 0x000c328ca, 0x0011c6183, 0x0019c2108, 0x001e209bf, 0x001bc7794, 0x0019958e2,
    0x00096bdbb, 0x00014f90e, 0x00063b977, 0x000cca2ec, 0x000c343fa, 0x0018df8f3, 0x000c64b59, 0x0010965a6,
    0x001b2382f, 0x0018e3144, 0x0010364f5, 0x001474a12, 0x001c0f32b, 0x001941390, 0x0018be051, 0x001039d3e,
    0x001ba65e7, 0x001c4829c, 0x00122596d, 0x001d7cb2a, 0x0002a8c63, 0x0011bffd6, 0x00165229f, 0x0017ef6f4,
    0x001d874e5, 0x000532742, 0x00081a49b, 0x001a9d440, 0x00056ed6e, 0x000174e57, 0x00098ee4c, 0x00143be5a,
    0x000b91bd3, 0x001269118, 0x000ba6939, 0x00124c606, 0x00131c90f, 0x00039c8a4, 0x00025a0d5, 0x0015ff072,
    0x0001260f0, 0x001021a31, 0x000e1e99e, 0x0019172c7, 0x00054e5fc, 0x000b0714d, 0x0010a1d8a, 0x000c0a743,
    0x000630229, 0x00156b836, 0x0010f2b7f, 0x000b9e8c5, 0x001d0a5a2, 0x001227b7b, 0x0011f0121, 0x0003791ce,
    0x000c369ac, 0x000e1e73d, 0x001ede8ba, 0x001882eb3, 0x00013f719, 0x000a4d666, 0x000b449ef, 0x000799004,
    0x000244cb5, 0x001c846d2, 0x00190a0eb, 0x00107de50, 0x000aae5fe, 0x000f96fa7, 0x0006f795c, 0x00158f92d,
    0x00016b223, 0x000bbad28, 0x0002c4809, 0x00198245f, 0x0011485b4, 0x000b3cca5, 0x000b1425b, 0x001976301,
    0x000a4150c, 0x00144a71d, 0x001d9c31a, 0x00026a3d8, 0x000caf4f9, 0x0002196c6, 0x000a58764, 0x0012b5fcb,
    0x0004c8bb0, 0x00030ddf1, 0x001aa5c87, 0x0016c3cbc, 0x00193f10d, 0x00027d24a, 0x00164ad03, 0x001cefde9,
    0x001f638f6, 0x001b80d3f, 0x001979514, 0x0013e2085, 0x00176b262, 0x000c734e1, 0x00134ea8e, 0x0014facf7,
    0x00192f06c, 0x000f5d6fd, 0x0001f4d7a, 0x000f22473, 0x001947538, 0x000d762d9, 0x000330726, 0x000a21baf,
    0x001b86910, 0x001d967d1, 0x0015c3967, 0x000a3301c, 0x001d958ed, 0x0004334aa, 0x001e297e3, 0x0014d4fe8,
    0x0014323c9, 0x0018b0156, 0x001cf40c2, 0x001a676c1, 0x001819eee, 0x0002701d7, 0x0006d76dd, 0x001d687da,
    0x0016b7698, 0x0003140b9, 0x001faf055, 0x001cf69f2, 0x000dead8b, 0x0002d61b1, 0x001c70647, 0x0016c537c,
    0x000a130cd, 0x000dc470a, 0x001a9e948, 0x0001879b6, 0x0019caeff, 0x001e41845, 0x0012136fb, 0x001342f20,
    0x001cd034e, 0x001fb372c, 0x0002386bd, 0x00017723a, 0x00083a7f8, 0x000d08e99, 0x00073f7e6, 0x0013bad6f,
    0x000228d84, 0x0001b5c35, 0x000668052, 0x001673c6b, 0x00065b3d0, 0x00024cb91, 0x000d9b77e, 0x000a2c327,
    0x0014e3da3, 0x00133b2a8, 0x000d167df, 0x00021e334, 0x000530480, 0x001af17ae, 0x000cc7b97, 0x001fa0c9a,
    0x000ad4c79, 0x00194de4f, 0x00159bb4b, 0x001572130, 0x001a77007, 0x001152a3c, 0x001e77bca, 0x000abf883,
    0x000383569, 0x0007d7a76, 0x0000f0be2, 0x000bfdc0e, 0x0009656fa, 0x001bf7a59, 0x00027a8a6, 0x00040ff2f,
    0x0007183f5, 0x000ee2a2b, 0x000ddef51, 0x000e1403e, 0x000a4dd9c, 0x000899e2a, 0x00019a363, 0x0012ed568,
    0x0018502d6, 0x00157a99f, 0x001d053e5, 0x001865a42, 0x0015dde41, 0x00097506e, 0x00185b557, 0x00104515a,
    0x0017ff2d3, 0x001c35c18, 0x001ff1839, 0x000088906, 0x0014d43a4, 0x001a78bf0, 0x000b50c9e, 0x0010b99c7,
    0x00126c0fc, 0x00009708a, 0x000cf3e43, 0x000b57129, 0x00019327f, 0x00065e154, 0x001b2a4a0, 0x001325021,
    0x000cd74ce, 0x000cc263d, 0x0005bfbba, 0x000504d78, 0x0017210ef, 0x0008e8b04, 0x001596bb5, 0x0017fb9d2,
    0x000b68950, 0x001c4d311, 0x0013388fe, 0x000db16a7, 0x001feb828, 0x00032aba5, 0x001180702, 0x000dd395b,
    0x000863201, 0x00012af17, 0x00088300c, 0x000c2661d, 0x001b5561a, 0x001b90893, 0x000566ed8, 0x0007c0264,
    0x001300795, 0x001a716cb, 0x000d4b6b0, 0x001f4b55e, 0x00043700d, 0x000f24403, 0x000127188, 0x001b86ce9,
    0x00031143f, 0x00056d014, 0x000a1703b, 0x0009493f7, 0x001c715fd, 0x00028607a, 0x000adc038, 0x0017e91d9,
    0x0008ee2af, 0x0016da9c4, 0x000931375, 0x0019a7692, 0x001f345ab, 0x001da1410, 0x0009091be, 0x0014ce067,
    0x001bc57ed, 0x000635ae8, 0x001d6c365, 0x0017873c2, 0x00183971b, 0x0019801ee, 0x0003368d7, 0x0005235dd,
    0x0002e4198, 0x00023efb9, 0x001a1b38f, 0x001bb8124, 0x00128f0b1, 0x0009f1e1e, 0x001842e7c, 0x001c97448,
    0x000bcfcb6, 0x00084b5ff, 0x001087ed4, 0x000cd7745, 0x0012e77a1, 0x000a72db7, 0x00093d22c, 0x000dbc5bd,
    0x000d03133, 0x001aff2f8, 0x00157746f, 0x000f1736b, 0x001fa5ed0, 0x001a26a27, 0x001ed77ad, 0x0003a54a3,
    0x0011cbda8, 0x00068254f, 0x000c54c30, 0x0016a3471, 0x0017446de, 0x001353708, 0x001acfd76, 0x0013aed94,
    0x00170bee2, 0x0010dabbb, 0x00116bf0e, 0x00037d8ec, 0x001ca357d, 0x00014a959, 0x00071eba6, 0x0003e2744,
    0x000fba2f5, 0x0019bb3e7, 0x00011389c, 0x000e8576d, 0x000eae068, 0x0001a05d6, 0x000c06cf4, 0x00097929b,
    0x00130e45a, 0x00142c9d3, 0x0009fc739, 0x0017a570f, 0x000ffd672, 0x00074c38a, 0x000d9d543, 0x00163e029,
    0x00057697b, 0x0010f57ce, 0x001f49fac, 0x001360eba, 0x000105519, 0x001aa8ab5, 0x001232cd2, 0x00029e211,
    0x000f7c5ea, 0x001eee023, 0x001042609, 0x001d62696, 0x000f23a02, 0x00085305b, 0x0015da500, 0x00051ac2e,
    0x0018c1617, 0x001f84b0c, 0x001dc251d, 0x001fce91a, 0x0015e7d64, 0x0012e3332, 0x00195fbf1, 0x001f8aa87,
    0x0018eef0d, 0x00148784a, 0x000553ef6, 0x000661b3f, 0x001220b14, 0x0011ede85, 0x0003454fd, 0x0009d737a,
    0x000130b38, 0x00181c0d9, 0x000c78d26, 0x001ab3275, 0x001c7bf10, 0x0003585d1, 0x0017be61c, 0x0007edaaa,
    0x000c565e8, 0x0004901c9, 0x0000da6c2, 0x0010231cc, 0x001d2f4dd, 0x001729eb9, 0x001162e55, 0x001901b8b,
    0x001007fb1, 0x001b2ed0a, 0x001dd97a9, 0x001d2d645, 0x00084e522, 0x0007714b7, 0x001cb983a, 0x001108833,
    0x001283df8, 0x00028ec99, 0x000f7aa6b, 0x0015b09d0, 0x00142fd7e, 0x000de1127, 0x0001376ad, 0x000b39d89,
    0x0000c75df, 0x001e8e881, 0x000c3849d, 0x001f76c4f, 0x000472cb2, 0x001ff7730, 0x00031be07, 0x00016e03c,
    0x0007421ca, 0x000c31369, 0x001be71e2, 0x0018322bb, 0x00119a20e, 0x001807cfa, 0x001e82ea6, 0x001928d2f,
    0x001282244, 0x000a1c1f5, 0x000bc982b, 0x000a0863e, 0x000e65ae7, 0x00009939c, 0x00031442a, 0x000db08d6,
    0x0007327f4, 0x0001411e5, 0x0003f1540, 0x0001c166e, 0x000168357, 0x000c03f4c, 0x000b3e7c7, 0x0011dee4d,
    0x0004c168a, 0x000e06c43, 0x0006e4f29, 0x001025754, 0x000a6bea2, 0x000fd3ace, 0x00174a43d, 0x000188419,
    0x001dc8104, 0x0016af111, 0x0009d8a5c, 0x00011b6b4, 0x0018469a5, 0x00091e41d, 0x001b8b693, 0x0019a04d8,
    0x0003201f9, 0x001f54595, 0x0015b2632, 0x0001284cb, 0x001928af1, 0x001eecdbc, 0x001facb4a, 0x000017203,
    0x0018f8788, 0x00057223f, 0x001f94614, 0x000393d85, 0x000c2d560, 0x000fa21e1, 0x000bb938e, 0x00057c16c,
    0x0003d93fd, 0x001419fc4, 0x001df5175, 0x0003db3ab, 0x000ad94d1, 0x0015655ed, 0x001beadaa, 0x0009ddce3,
    0x001110574, 0x000368165, 0x000614ccc, 0x001fe40da, 0x000bf8c53, 0x0004dcd55, 0x001f8f770, 0x001b40eb1,
    0x000f8adcd, 0x0011606a9, 0x0008a02b6, 0x001b0f4d4, 0x000f43545, 0x001649bfb, 0x00127f020, 0x00114ac4e,
    0x00182fbb7, 0x0012043bd, 0x0004cdf33, 0x000ec88f8, 0x000b8b935, 0x00179e16b, 0x00055b827, 0x000d575ad,
    0x00097826a, 0x000f40682, 0x0013740ae, 0x00112b097, 0x0001e5979, 0x00125c146, 0x00042b34f, 0x000981515,
    0x00105a230, 0x001fe4d08, 0x000f824e2, 0x000675577, 0x001dcb37d, 0x0019354f3, 0x0008a71a6, 0x0015dcf2b,
    0x001fc1c51, 0x00082293e, 0x00046f668, 0x0013ee849, 0x001973e9f, 0x0005ff0e5, 0x000b38040, 0x00138ea57,
    0x00161bd18, 0x000cfb4a4, 0x0012f0cf0, 0x00036759e, 0x000e20ec7, 0x000e451fc, 0x0013f6f37, 0x0002e34ba,
    0x000898ab3, 0x0017cb319, 0x00151e266, 0x001157c04, 0x0002e12d2, 0x000d571fe, 0x001b70e23, 0x0018fd928,
    0x000491e5b, 0x00161b0f9, 0x001e4a2c6, 0x000023bcb, 0x001f71e5e, 0x00087a8bc, 0x001f9ed0d, 0x0016f9c85,
    0x00140768e, 0x001cb48f7, 0x001b15c6c, 0x0019c1ed9, 0x0000c1326, 0x000bd9ac4, 0x00001a3d1, 0x001337abe,
    0x001d1021f, 0x0008c7c1b, 0x001fa35c0, 0x0014c67cc, 0x00038d3da, 0x000f86353, 0x00176888f, 0x0018fa247,
    0x001f01548, 0x0007312fb, 0x000bbdb20, 0x001848f4e, 0x0012fbe3a, 0x000fcd3f8, 0x000f14a99, 0x0017903e6,
    0x001cfd835, 0x00078186b, 0x0005c437e, 0x0009e556a, 0x0009fdea8, 0x000f8cf34, 0x0012799db, 0x001bca3ae,
    0x000c8589a, 0x000cdf913, 0x000b0c7ca, 0x00054d808, 0x000d54c05, 0x000e210bb, 0x0001aa2fa, 0x0010aabf3,
    0x001d41b2f, 0x00141fff5, 0x0002d8912, 0x00079c59f, 0x000734ed3, 0x001d9af72, 0x00072ec4d, 0x000e19a43,
    0x001972d29, 0x001994e7f, 0x000178c21, 0x0015870ac, 0x0016b2566, 0x0019585d2, 0x001693550, 0x00002e428,
    0x0014627a5, 0x00065155b, 0x0005fd52e, 0x000ed62b0, 0x001a3714a, 0x0016d303f, 0x000c1fb85, 0x000674c3b,
    0x00150ab60, 0x00096f76c, 0x00084ac7a, 0x001b34dd9, 0x00058c010, 0x000171dbe, 0x001daf71c, 0x0008253aa,
    0x000be1056, 0x001063f65, 0x000a0a0c0, 0x001fd31dd, 0x00186abb9, 0x0019ee60a, 0x000df65c3, 0x0009ae4a9,
    0x0017cd1ff, 0x0018af345, 0x0011bc620, 0x001d4c1bd, 0x0015f7999, 0x0012846e6, 0x0011e906f, 0x000336a89,
    0x000a0b116, 0x001ef298c, 0x001c1d013, 0x001e34746, 0x001b3713c, 0x000456069, 0x0018833bf, 0x000026761,
    0x001016559, 0x00085fc12, 0x000143d2b, 0x001891663, 0x001d358f4, 0x0015a5942, 0x00131b857, 0x000d3904c,
    0x0001b305a, 0x000db730f, 0x0005a0f8a, 0x001983ba0, 0x000cee3ce, 0x000e70bac, 0x00083613d, 0x0002af3ef,
    0x0009deaeb, 0x0011311ea, 0x0005b211d, 0x001d50ef9, 0x000b564cf, 0x001606964, 0x00169ff32, 0x000b037f1,
    0x001654687, 0x000c6f714, 0x0010ec33b, 0x0017116f7, 0x001d62e73, 0x000a03738, 0x00123ae75, 0x001766b10,
    0x0004f52ed, 0x0000626aa, 0x0013521e3, 0x0014591e8, 0x001191356, 0x000130bc0, 0x0011bf0ee, 0x000f56bd7,
    0x001c69dcc, 0x001831bf2, 0x000c2f78b, 0x00080cd1e, 0x000d7fcc3, 0x000878bb6, 0x00110d8ff, 0x0010400fb,
    0x00047b120, 0x0011902a1, 0x00168554e, 0x0000389e6, 0x001786f84, 0x001521635, 0x00006b416, 0x0015291df,
    0x001e0f625, 0x000309f82, 0x00074e597, 0x001040a46, 0x000bbf215, 0x001caff71, 0x0009d6dca, 0x000e5ee08,
    0x00028cf69, 0x001e00a77, 0x000229459, 0x001793aa6, 0x000f1c090, 0x00162ff9c, 0x000158c42, 0x000c8659b,
    0x00135a26e, 0x001c0d05d, 0x001fb1b06, 0x000e28df0, 0x0016570c8, 0x000300b29, 0x000c15c7f, 0x000cb4354,
    0x000b22a21, 0x000b20f78, 0x001072d11, 0x000c8f22d, 0x001a7e4ea, 0x001455323, 0x00169d109, 0x0009ebc00,
    0x0016f1917, 0x00192abcf, 0x000d66d87, 0x001733e3f, 0x001ce3214, 0x001878caf, 0x001c7cd75, 0x000252892,
    0x001fb1fc1, 0x0013a53ee, 0x0006009b9, 0x0014aa9cd, 0x001c2b648, 0x001b66422, 0x0004251a1, 0x0000a97b7,
    0x000f93fbd, 0x0000acce6, 0x0016a1e6f, 0x0008c5427, 0x0013ace6a, 0x000ff4889, 0x000b84c97, 0x001aa9115,
    0x0002d273c, 0x001291983, 0x001207908, 0x000683e69, 0x000660f76, 0x000d64f94, 0x0004a6905, 0x00158b0f3,
    0x000b8702f, 0x001845cf5, 0x001334463, 0x001a4cef4, 0x001bcbf42, 0x001ff8872, 0x0010bb8f0, 0x0004b019e,
    0x000d4b58a, 0x001067a29, 0x001c97921, 0x000cc5a78, 0x000beee66, 0x000dd44b5, 0x0018258eb, 0x001525db4,
    0x0009917cb, 0x0006314bc, 0x0001fe90d, 0x001fa3e88, 0x000a51f26, 0x00115c110, 0x001717167, 0x0000150ed,
    0x00151ccaa, 0x0004da7e8, 0x000531956, 0x0015b1fda, 0x001d6b8b9, 0x0000f3f86, 0x00144658b, 0x001183e47,
    0x0006528cd, 0x001fc1b4e, 0x001427eb7, 0x0012ffb27, 0x000ba7edc, 0x000f1a16a, 0x000ef3789, 0x001ee5c80,
    0x000855513, 0x001a31ce4, 0x000a70408, 0x001f461e0, 0x00021f2b8, 0x001175512, 0x001c7e22b, 0x001fe583e,
    0x00148362a, 0x0019f89f4, 0x0004ff242, 0x0000c5641, 0x000d2e14c, 0x00038e95a, 0x00159b418, 0x001149039,
    0x000ec2131, 0x0016598fc, 0x001f7b954, 0x00052aa7b, 0x000dadcac, 0x0000e1e3d, 0x000f13db3, 0x000c71028,
    0x001c1ee1a, 0x00084c6d8, 0x0007671c6, 0x0018139cf, 0x001c60eb0, 0x0006cbb87, 0x001af680d, 0x001effd62,
    0x000ece58e, 0x000651aaf, 0x00189eed1, 0x000e90286, 0x00018361e, 0x000c7fe4e, 0x0008dbdbd, 0x000a5ac6f,
    0x000456084, 0x000e3d9dc, 0x0002d6fad, 0x0010b0ca3, 0x0013b2689, 0x00171a78d, 0x001ae56e2, 0x001235ef3,
    0x00124109c, 0x000c981d3, 0x001fc8f0f, 0x0005f6e72, 0x000e2f8c7, 0x0019ff454, 0x000379ec5, 0x0008b217b,
    0x000a7e7a0, 0x0018c1721, 0x000745d3d, 0x0017d7466, 0x000c39e09, 0x00159d3b4, 0x0016091d8, 0x000ab104a,
    0x000389303, 0x00101d685, 0x001738a73, 0x001e51710, 0x00005fdd1, 0x000c079c9, 0x0004c8cc1, 0x0019d7cee,
    0x000d816b9, 0x0015d736f, 0x001a8fe52, 0x001696b82, 0x00065b08c, 0x00066e14b, 0x000149876, 0x00073a677,
    0x0012c4bec, 0x000cf6c7d, 0x0003f5059, 0x000f86c90, 0x000326d40, 0x00139174c, 0x000374a18, 0x00171ee39,
];

pub(crate) static CODES_6X6_1000: [u64; 1000] = [
    0x00d24258ff0, 0x00603b25d31, 0x00bec1ab09e, 0x00772456dc7, 0x00a807d04fc, 0x001521ee44d,
    0x0037f81548a, 0x00fbefe5243, 0x00d8282b2c8, 0x00c3612a529, 0x0000e135f36, 0x0068811867f,
    0x00a98b8a554, 0x0019c5dbbc5, 0x008c249bca2, 0x0019dd4867b, 0x002f6a9a8a0, 0x0022b9a0421,
    0x00e455418ce, 0x00c7ffc8e37, 0x002e3f548ac, 0x00b1d471a3d, 0x00fcd04dfba, 0x007e41bd178,
    0x00570a65a19, 0x00e307d3d66, 0x009abd764ef, 0x00ac30a4f04, 0x00f9356dfb5, 0x00fef991dd2,
    0x00cc6ef6beb, 0x00252668d50, 0x00d5bb18711, 0x00fd91b2cfe, 0x0003ceeeaa7, 0x008639b185c,
    0x00ff0e4ec2d, 0x002bb98d6ea, 0x0005aaddd23, 0x00b4aa33c28, 0x008fcd16b09, 0x00f4d264796,
    0x002f59704b4, 0x00a43a51fa5, 0x00e35c26b02, 0x00964f73e00, 0x00c7d37e601, 0x00ee882ed2e,
    0x00b86738317, 0x00b10b9740c, 0x00c677f1c93, 0x00e4e817dc6, 0x009066655cf, 0x00f4a09c664,
    0x00505577b95, 0x0048068a432, 0x00ee4f3aacb, 0x008ccb6bab0, 0x0018b2c20f1, 0x004135e595e,
    0x00b21a15787, 0x002f95b5bbc, 0x00e5bfd640d, 0x000f7be094a, 0x00233155803, 0x00eaf28f588,
    0x00d6429a0e9, 0x00015c1dff6, 0x001635d683f, 0x00d2ecd9414, 0x00a563cf385, 0x00f9deec962,
    0x00686eb043b, 0x00e48c00360, 0x00c824d37e1, 0x00c8840718e, 0x00a2b4f67f7, 0x005d84bcf6c,
    0x0046b1609fd, 0x00aae15447a, 0x00439b78f73, 0x003d75d4438, 0x00574d4c5d9, 0x003aada6e26,
    0x00ac92836af, 0x009c9e48775, 0x00b6f77da92, 0x00b68ee1810, 0x008511a2ad1, 0x0088814b467,
    0x00a51e04bed, 0x00e3708ebaa, 0x006bb6cc2e3, 0x009b8ebdee8, 0x000221346c9, 0x00e6c7e2856,
    0x000aa3dc11f, 0x00c2ab45374, 0x001f99d3765, 0x00218e6d7c2, 0x00c11872b1b, 0x0083ddbf8c0,
    0x003c7d1f9c1, 0x003f424a5ee, 0x00d54483cd7, 0x00de4045acc, 0x008a68b29dd, 0x00a49dbfeda,
    0x0092bfbf253, 0x00440200e86, 0x00674760355, 0x00730dec0f2, 0x00208e4a570, 0x0068873a4b1,
    0x00554010147, 0x00e1622727c, 0x00a6d05a3cd, 0x00d28917e0a, 0x00ba2ec1dc3, 0x00688865ca9,
    0x00bc1f320b6, 0x00e1ba342d4, 0x001af3deb45, 0x00ef0c29622, 0x00e547941fb, 0x005ec231e20,
    0x000e7c78a4e, 0x00ea93b162c, 0x00d06feb9bd, 0x001cfec693a, 0x0024f4376f8, 0x0084538f199,
    0x00e74ea5ee6, 0x00e5624c86f, 0x00e00814c84, 0x002f483ef35, 0x00164b55752, 0x006d4ec076b,
    0x00e28308e91, 0x0002da7fe7e, 0x008e51e3e27, 0x00307d945dc, 0x00c23e56bad, 0x008d4cb68a3,
    0x0099b8941a8, 0x004f2b8c916, 0x0027ff26234, 0x0099b9a0482, 0x006f9f948db, 0x004076d7380,
    0x002d409cd81, 0x0040ac11eae, 0x0043570b697, 0x00a6948018c, 0x00f315e839a, 0x00fe1888813,
    0x00ceb6b2f79, 0x007fdcf794f, 0x00999a183e4, 0x000d7139db2, 0x000176f5030, 0x00c4348e871,
    0x006d4e5eade, 0x00317246b07, 0x0098192493c, 0x00847672176, 0x00438686bbf, 0x0012320a305,
    0x005bb8522e2, 0x00b683f3fbb, 0x00c40acdf61, 0x008f0a9630e, 0x00b25105b77, 0x0020b4a4dfa,
    0x00d7340baf3, 0x0075192dd59, 0x00fc88d1a2f, 0x00d7225eb44, 0x00bfef516f5, 0x00f80119412,
    0x00e85b36d90, 0x00708b4b251, 0x00a41cb87e7, 0x00b36a57c9c, 0x005158d552a, 0x002f089ce63,
    0x00606c83e49, 0x00d1e9bf142, 0x00ac183269b, 0x00c399f6141, 0x00c1918576e, 0x00907acf057,
    0x001db44684c, 0x00dbf00095d, 0x0042ba7fb39, 0x00326557006, 0x008866682a4, 0x003344852d5,
    0x00083c73a72, 0x00fe8a9d39e, 0x00938cb94c7, 0x00fa66adffc, 0x00e7393634d, 0x00d16fca78a,
    0x000dcd8e943, 0x00ac490e054, 0x005bef66fa2, 0x00be3fcfd7b, 0x000a1cf93a0, 0x006d7d95321,
    0x000efa5fbce, 0x0002efe7537, 0x00a0be3e3ac, 0x002f8eef2ba, 0x008caacf0b3, 0x00ba7fe1c78,
    0x00a56212bef, 0x00cda669611, 0x00d4bdc91a7, 0x0006a0ceb2d, 0x0051867f423, 0x00358c24728,
    0x00a45bb5a09, 0x00146d64a96, 0x009b3f9865f, 0x00b69e4c45b, 0x007cbea502e, 0x00c68bcea17,
    0x00234b98f0c, 0x00f2491191d, 0x008041fbdd8, 0x00807b99732, 0x00045bb61cb, 0x00b669ae5b0,
    0x00fd09caff1, 0x0005a187c5e, 0x00446b67e87, 0x007af6c36bc, 0x00cba6eef03, 0x00a711762f6,
    0x0037bd67c62, 0x009a9727b3b, 0x008d198ee60, 0x00ef40386e1, 0x003f17d548e, 0x000fea04ef7,
    0x008931d6a6c, 0x00074d348fd, 0x006f19a577a, 0x0032b88e673, 0x0009d27f4d9, 0x008f4a0fdaf,
    0x005790168c4, 0x008ac264d92, 0x009c13110ab, 0x00b450639d1, 0x0031625d9e3, 0x005e0dde9e8,
    0x0018ff708ee, 0x006b660a3d7, 0x006306775cc, 0x00dde4e91da, 0x0087ea2d2b9, 0x0099ad5d186,
    0x00b47a2c024, 0x00445f1e51e, 0x0088ea52847, 0x00587564d7c, 0x00483c822cd, 0x00fbac4b4c3,
    0x00983bf8348, 0x000f3b2cba9, 0x00c3ed3a3b6, 0x00fa9817dd4, 0x00632e54922, 0x00a5a5fb8fb,
    0x0038ceb7aa1, 0x009d1b5e8b7, 0x00b0e0c7c3a, 0x00e7be32099, 0x00cde5eca52, 0x00fb0539d91,
    0x001df29e527, 0x00ef6bea0dc, 0x00f69ae936a, 0x009ef7ecc16, 0x00d0d321d34, 0x0019d8fee25,
    0x003fb72de80, 0x00291fe81ae, 0x00d21c22358, 0x0064e522246, 0x003985a90b2, 0x00bc54dbd4b,
    0x003b0397b30, 0x00688f60dde, 0x0021e579207, 0x009d8e9243c, 0x000bfc805ca, 0x00b479a3a83,
    0x0003d4b72bf, 0x000b15aec94, 0x006ea7d0205, 0x00944d1e3e0, 0x0055a512e61, 0x00ea5ff4277,
    0x004d31ab7ec, 0x007270560fa, 0x00b309011f3, 0x00cfb63e12f, 0x00dc19fe644, 0x00b27fb2c2b,
    0x00bd8a42a3e, 0x00b83e62ee7, 0x006412dd79c, 0x005a627282a, 0x00595d36f68, 0x00024ef0b9f,
    0x00afcb72442, 0x002bec0ba6e, 0x003b96d834c, 0x007b6705b5a, 0x00ea7da7618, 0x000c3a13306,
    0x005d623f20f, 0x0037f028b0b, 0x000c7d3e5f0, 0x004c38dbbc7, 0x004dbe3fa8a, 0x0048aaf8043,
    0x007086b8329, 0x00253d46536, 0x0080af9947f, 0x007e0751b54, 0x005c5a1747b, 0x00ac7a3dece,
    0x00dd54505ba, 0x00d483b47b3, 0x00bfa2c6778, 0x00f55784504, 0x00feeec03d2, 0x005c05072fe,
    0x005cc167cea, 0x0083c167ab4, 0x00a36d8bb5b, 0x008c2fdb32e, 0x0027c45aa0c, 0x007849b601a,
    0x002f59e35f9, 0x00eff8303c6, 0x00e45fabc64, 0x0090ef68a32, 0x00c0c07a587, 0x0046dc48603,
    0x00479900a14, 0x00fa0f5b185, 0x00dfcaa2f62, 0x00f5466378e, 0x003092d35f7, 0x00f78d723d9,
    0x00143ce48d1, 0x007f47124c9, 0x0043f39c974, 0x0029db1191b, 0x00bbdb50ad7, 0x00a33c8a7dd,
    0x00dc6b79486, 0x00e4e694155, 0x00c259ec2b1, 0x0039316287c, 0x00f3926a1cd, 0x00636070e48,
    0x00a7f6bb8d4, 0x00633c22ffb, 0x00f61e94f99, 0x00199fb4284, 0x005e9f43d52, 0x0002189447e,
    0x006db6d69ad, 0x00c365f57a8, 0x002d670cf16, 0x006fb466a82, 0x00ac4e7e4ae, 0x005687b8497,
    0x00a80e5a99a, 0x00206243613, 0x0009dfee546, 0x005b29e79e4, 0x00da6078915, 0x00b0acfa630,
    0x00776cbff3c, 0x00e7aedd183, 0x00d70cbb669, 0x005edea79bf, 0x002b4c82794, 0x00cc92c88e2,
    0x00c37d17d61, 0x00a827b290e, 0x00c463e52ec, 0x0019773a77d, 0x00c972c73fa, 0x00558db68f3,
    0x008b110ffb8, 0x001e846c390, 0x00f8244d051, 0x00c5495cd3e, 0x0060c3cd5e7, 0x0066842329c,
    0x002ef8a496d, 0x00fcfb77a68, 0x00820642fd6, 0x0090aa2a6f4, 0x009bf229e4c, 0x00d5bfe8bd3,
    0x00ad95790d5, 0x00da1cc199e, 0x001e66753c8, 0x00768f6e836, 0x00320079b7f, 0x003f287d8c5,
    0x004746519ac, 0x0099e9dd73d, 0x00e920718ba, 0x00bccc59eb3, 0x0037464b411, 0x00844ed15fe,
    0x000f06bdfa7, 0x0009a30e92d, 0x00371774fea, 0x00a60ba5096, 0x00ade08945f, 0x00063450402,
    0x000901c5301, 0x004fdbd162e, 0x00af903b817, 0x0018ccaf31a, 0x00ba468a193, 0x00a791de4f9,
    0x0033211cdf1, 0x00a9f05024a, 0x00f097c1085, 0x0075069e262, 0x00d84f5693b, 0x008e1aec460,
    0x00f181f9473, 0x00973212538, 0x005f7e252d9, 0x0064acb1910, 0x009298c07e3, 0x005ac333156,
    0x0010d9b66c1, 0x000969fceee, 0x00bda4571d7, 0x002be77b7da, 0x00f1b902698, 0x007f1f430b9,
    0x0047919dc8f, 0x007f131b624, 0x00e42621d8b, 0x004e0751eff, 0x0074d61f3d4, 0x0060c920845,
    0x00250a0a6fb, 0x00f80da18a1, 0x002fa43334e, 0x00d76bf76bd, 0x0001390a23a, 0x001d4a94a33,
    0x008372027e6, 0x002634a3d84, 0x0009ea863d0, 0x005452dbb91, 0x001021b68ad, 0x00245bc62a8,
    0x00602d6af89, 0x00cd78ed216, 0x00e71d59334, 0x0022063f69d, 0x008fb09b958, 0x004f3e03c79,
    0x0073ad7a846, 0x000dcaef4e4, 0x00012ac76b2, 0x00dd731d130, 0x007dd1a53de, 0x000a571e007,
    0x0050b3ada3c, 0x00d6e24abca, 0x0057c2daa76, 0x00c98623be2, 0x00d7783a4bb, 0x00db5b3b9e0,
    0x000ef36e67d, 0x0008bbf86fa, 0x00a5c22bff3, 0x0044bc44ab8, 0x00339456f2f, 0x006a32b73f5,
    0x00576c2ed12, 0x00d4acf7ce7, 0x00646df486d, 0x00493a31363, 0x009778d32d6, 0x000a115806e,
    0x00063842557, 0x00a9c63b94c, 0x00c5fb0465d, 0x0022e8562d3, 0x00682480c18, 0x00fe1bff90b,
    0x00322b23bf0, 0x005be5f3c9e, 0x006e5c609c7, 0x0060a456b36, 0x00cfe8488a2, 0x005780954a0,
    0x009096cfd78, 0x004961a4966, 0x0016a4422ea, 0x00f457e3923, 0x00e5ac5f0b4, 0x00fd6f33702,
    0x001083cea00, 0x00787011f17, 0x008d80b1ed8, 0x00491f993f9, 0x007c61bb264, 0x00e1491f795,
    0x0045d347032, 0x0016f0f66b0, 0x00c2e165cf1, 0x00828e6c7bc, 0x007a7159562, 0x00f1df0e03b,
    0x0005cda3b6c, 0x00be6b1907a, 0x00c70fa7038, 0x0080a4981d9, 0x006122d0375, 0x00b416f5067,
    0x00419673b1c, 0x00064c447ed, 0x006c217dd1f, 0x005dbef3f74, 0x00f0d03a3c2, 0x00f634135c1,
    0x00751ff1a86, 0x00f2ffe238f, 0x00a43968cf2, 0x00e3a39de7c, 0x00329deca0a, 0x00c723679c3,
    0x00f20fb1dfb, 0x00f50fd9db7, 0x0092d55822c, 0x0003737b5bd, 0x0083af4b53a, 0x00e75ada133,
    0x001bbe86b35, 0x00d31e4ca91, 0x00134f30c6a, 0x00522d8d516, 0x00a804b1f80, 0x004edbeaaae,
    0x00b8da86d8c, 0x00c4a1f8458, 0x008d169eb79, 0x0022bb769b2, 0x00e48459f8d, 0x001cd88ff83,
    0x006b315e708, 0x00f2e1d2d76, 0x004125c87bf, 0x00dd7c69d94, 0x008863d1bbb, 0x001a47ca12a,
    0x00d0130d44c, 0x0079a0839d3, 0x00b73f0d718, 0x002d28c7c06, 0x00181d8b00b, 0x005db7d5f4d,
    0x00d2157a97f, 0x0056f76d97b, 0x006076e8f21, 0x000aace4cb3, 0x00bfe3fdc2e, 0x00c2e3a8617,
    0x00a2fbe2d64, 0x001cdb23dcb, 0x001d02391b0, 0x00746f6ebf1, 0x00cb927a2bc, 0x0003da5a84a,
    0x00a10dcce85, 0x0001174c2e1, 0x0022be044fd, 0x009a00cb0d9, 0x0022ddc19af, 0x000274954c4,
    0x000035bf767, 0x002d2dd3756, 0x0078c64641f, 0x003f55bfa74, 0x00b7ef00fc0, 0x0032850ddda,
    0x00e0c282553, 0x005aab58eb9, 0x00f1164dd86, 0x009d3d16fb1, 0x009917269d4, 0x0008bc3ab6f,
    0x00c583c9652, 0x00d43ac0dae, 0x0007b9e888c, 0x00c121b6615, 0x004663c994b, 0x002e23151ca,
    0x00af9947208, 0x00742520369, 0x00f662f8ebf, 0x0085757d894, 0x00ec77a6a61, 0x00081bfd20e,
    0x00eb3a56df3, 0x00795ffd244, 0x00780a8082b, 0x00faaa8cae7, 0x000f4f54163, 0x00ce64ae949,
    0x009e21a466e, 0x0016d94f357, 0x00dfde5a218, 0x0006987e9a4, 0x0007eefb731, 0x00da1e1dc43,
    0x0021f0b507b, 0x009b0536ace, 0x001ead551ba, 0x009a3f0cf66, 0x00d0cf8e62d, 0x00801b10509,
    0x00ab7da5996, 0x007eb225632, 0x0093fcf2b5e, 0x005dec65e0d, 0x007b2f2e203, 0x00e62903788,
    0x001910e3ae9, 0x0038fb72d85, 0x00e1d30fb62, 0x00460c1c38e, 0x00e8c794fc4, 0x00dfed7f11c,
    0x00041874ce3, 0x007c80c20e8, 0x009db743a56, 0x00e37ec7165, 0x00e8c20d3c1, 0x0034993a3dd,
    0x00128df70da, 0x0003766428b, 0x0078a44feb1, 0x00e80f4f6a9, 0x00fd8e22545, 0x0027d66c822,
    0x00ef96d67dc, 0x00a203cb26a, 0x003a16e7c89, 0x00f6d8112db, 0x000c069f146, 0x0000c5a0515,
    0x0094bae504b, 0x00b2ddb5507, 0x00bf0142d83, 0x008ff007ae0, 0x008146ab961, 0x0005ac04612,
    0x0050afd6f90, 0x00ee1132342, 0x001cf7e1e0b, 0x00bc59d54c5, 0x008094764ba, 0x00cfb87de78,
    0x00cc99e1266, 0x00e0a0ab8b5, 0x00a00b88928, 0x00341fb4932, 0x0063fafe7b0, 0x00c4e00c288,
    0x005afcba9e9, 0x00bfc830c6c, 0x0030b94c97a, 0x000684e5138, 0x00fa498ff92, 0x004e1e94567,
    0x0028c13ec1b, 0x00ff158e5c0, 0x00720015aee, 0x00da582d270, 0x00d01843ec3, 0x00bf5b2dfd4,
    0x0014d6152b7, 0x00c5aa7532c, 0x00183a8ee3a, 0x00ec25bcf27, 0x00ddb9ac2dc, 0x0013dae6b89,
    0x008724f6080, 0x00aa3537681, 0x00471f2b446, 0x00523d66a4f, 0x006fa6ad171, 0x00fd6767c07,
    0x004c4f3b676, 0x00cc27107e2, 0x0097449980e, 0x00bcc272659, 0x006d7ecb912, 0x00b3f291a90,
    0x005de9cc749, 0x00176ba359f, 0x002cfb29b40, 0x00bd278bed3, 0x0030267abd5, 0x00b598ed531,
    0x008ed630a43, 0x00db97f0ac8, 0x008ef6fd7b5, 0x0093feb9428, 0x00c46e40302, 0x00af485521d,
    0x0033240a14a, 0x00a953df7f6, 0x00b7af76c14, 0x00a95d75b60, 0x005af579c38, 0x00d6bfd45c4,
    0x0078fe06fc2, 0x003c987bdee, 0x00d7a6d32cc, 0x009ea099bb9, 0x00782e73f8f, 0x00f150e58f2,
    0x00ec140d5c3, 0x0039dc738b6, 0x0009b1541ff, 0x007acf8e345, 0x00ea3a82e22, 0x003484a5a89,
    0x00972f77adf, 0x009b3403a34, 0x004d8604581, 0x00d9f3bee97, 0x0056ac8d98c, 0x00756b55be4,
    0x005ba4d6071, 0x003ce538994, 0x00e9fda50e0, 0x00aa98ff4ec, 0x00f914b72f3, 0x0092a38549c,
    0x00a65add941, 0x002d906015d, 0x00221925aa4, 0x002f3254ad5, 0x007f189b7fc, 0x002cb1da143,
    0x007a502b854, 0x0073b7dad37, 0x008e76f8aba, 0x00dfaafa8b3, 0x00a427c9866, 0x0052d1828d2,
    0x00fa6ff0e11, 0x0071b147c5b, 0x003b4cfab93, 0x001a0c01964, 0x0085d6919cb, 0x00cb7cfb687,
    0x007e4aba703, 0x003ba5a87e9, 0x00ceafaa73f, 0x009eca5fee1, 0x0032b56b1d1, 0x0035f1e41e8,
    0x00b66e5a2c2, 0x00783304dcc, 0x006557d690a, 0x0003b201f84, 0x000dc1c0635, 0x000f0da6252,
    0x00ed6d52b6a, 0x00eb01999ae, 0x00f66eef48c, 0x00491c6f283, 0x00511e67a77, 0x00bf7556aa6,
    0x0035b1fbe44, 0x005b18c2df5, 0x0013c099f12, 0x004352b66e7, 0x0085920af9c, 0x00f1fafd59b,
    0x00c60868f57, 0x0037e84c05d, 0x001e14a2239, 0x0097e6d3df0, 0x00fea17da4d, 0x008d1b87d36,
    0x0066fbf1a21, 0x00a73c2f6ce, 0x006f01dffb3, 0x00e59101d04, 0x00179179bd2, 0x00ef3e8735b,
    0x00ae0fd8293, 0x00a443db6f1, 0x00e7f7c5a0d, 0x00d862bf6e9, 0x0076c77c762, 0x007d8c45892,
    0x002b7f3a8e3, 0x007e6bc4ce8, 0x002bdf026c0, 0x003bda01324, 0x00a7cab3ab1, 0x005f829273a,
    0x0041673ab33, 0x00fbb0ac799, 0x00d3fdffe6a, 0x0057c30e716, 0x0033ed80282, 0x009617fa180,
    0x002e606bc97, 0x00806943f4f, 0x00e0ca2410e, 0x002bbf16177, 0x00a5ae54851, 0x00e127bdc40,
    0x005ae58f657, 0x00348070e06, 0x002e098fa0b, 0x00c56ccd9ce, 0x00298ffcf3d, 0x006c2022dfe,
    0x0015c0917a7, 0x00d6a869c02, 0x001b5778b1a, 0x00e560b5cf9, 0x000482c87cb, 0x005145893b0,
    0x003566e0487, 0x0065e2fd90d, 0x00fc5bcc3af, 0x0015c287110, 0x00a83e18bc9, 0x00e4985cc65,
    0x008dff67e98, 0x002350cc1b6, 0x0017a813a3a, 0x00ce0f2aff8, 0x001fb4cf699, 0x00b1b721584,
    0x00ba6826b27, 0x0060fd865a3, 0x008162ae34b, 0x00abaf32930, 0x0096784188d, 0x0095edf5cbb,
    0x00e9250883e, 0x0005f17dd68, 0x0055a9c519f, 0x007500dc39b, 0x00870563e5d, 0x00587b78039,
    0x001191d1131, 0x00b241d36c8, 0x008c33a20a2, 0x00b2ad2b80c, 0x009bf544e1d, 0x00f31a1ed4a,
    0x00e5ae2d4e9, 0x0052611bc3f, 0x00db33c983b, 0x001d672f9d9, 0x00a97498aaf, 0x00d4c0fd9be,
    0x002c6e510d7, 0x0005e8c1ddd, 0x00b5ab97755, 0x000c122661e, 0x00e5b2ad547, 0x0043fca5a2c,
    0x00c99405933, 0x003eb3efaf8, 0x0079e072634, 0x00dbfe4070e, 0x0031dbb2f77, 0x00e27f0cef3,
    0x005ef591159, 0x00ffc76ba9b, 0x00cf98ef1d3, 0x00aa40e680b, 0x00be891574d, 0x00075e49fce,
    0x00bafb04d3d, 0x00ed1c1a078, 0x008de5ab75c, 0x000775ecb28, 0x008132af42e, 0x00df5fc5287,
    0x00ca19aede3, 0x001441b06b9, 0x006f6f9d470, 0x0093f7de7b1, 0x0029c132ea1, 0x008c0326149,
    0x006f65bb19b, 0x00f1f3f3f5a, 0x00eb9889172, 0x00092cfdf54, 0x00e799f86a2, 0x00e51cc5911,
    0x004aa648f88, 0x00e0c1309f6, 0x00d01cb5e38, 0x00236a21826, 0x007c436fcd1, 0x00f62699bdd,
    0x00a02899248, 0x00b91de4ab6, 0x00c16434a6a, 0x009157df489, 0x003b1b91f81, 0x0070c692b9d,
    0x00759808d9a, 0x002a9d8e7b2, 0x0017fa8ba71, 0x00334ebd4de, 0x0045221d505, 0x0067c74fd77,
    0x003c49196ec, 0x00f89f3de12, 0x007f271c16e, 0x0085047e24c, 0x00248b18d0f, 0x00169eb3ca4,
    0x00bb909bd9e, 0x00cadee554d, 0x00596b6a4eb, 0x00f6e50465b, 0x00f2f957ecf, 0x004b30081f1,
    0x00c58fa5b26, 0x0034c45308f, 0x00d28405455, 0x00a0cc15b0a, 0x007323c2b2c, 0x00d856f4be6,
    0x00faf6f1452, 0x00b00b59adc, 0x001e1090182, 0x0011328ea9d, 0x00936805112, 0x00356e625f4,
    0x008c4e23c39, 0x00cb8f07772, 0x0053e227711, 0x00ebec606ea, 0x0037f730fa5, 0x009ec17d432,
    0x00c46cec803, 0x00bb182743b, 0x0002cd227e1, 0x00924aea18e, 0x0044809f9fd, 0x0083cecff73,
    0x000d7f03bed, 0x003b026311f, 0x002aaa2a8c0, 0x00de9eeacd7, 0x00283296253, 0x00fe40f13b9,
    0x00dbe45688b, 0x00ec0fef21e, 0x000849b50b6, 0x00ed500b1fb, 0x00442e5ba4e, 0x0006ce3b2df,
    0x00277642380, 0x00b56c933e4, 0x00d7bb20030, 0x001e676db07, 0x0022e5c1468, 0x00b157096e5,
    0x00cb3925e40, 0x00460646d7b, 0x0062a978611, 0x0008fcc6fb4,
];

pub(crate) static CODES_7X7_1000: [u64; 1000] = [
    0x002ead3efd24a6, 0x00a019444bcb2f, 0x007104d17a0844, 0x01ac335c212ff5, 0x012b5a4e38f912, 0x01ccf2530db62b,
    0x00a86b31cf5a90, 0x00807015305b51, 0x011fb4e8f23c3e, 0x008022968d58e7, 0x011208e866399c, 0x0103e16858846d,
    0x00af61b0b25a2a, 0x00f6c97c86af63, 0x00fd0e2d4df168, 0x00954802fe0749, 0x01fafd75c17ed6, 0x011add0b7d759f,
    0x008971ebf28df4, 0x018748dd12ffe5, 0x007cc335929642, 0x01ca6b2fb9279b, 0x0032494f68db40, 0x0118a696734a41,
    0x00c67e27ef4c6e, 0x010a4ae0010157, 0x01c9907b7a654c, 0x00b9fb46e40d5a, 0x0070db1617fed3, 0x01692dbe717818,
    0x01b26eca7e0439, 0x00aa8c7d6c0506, 0x01585556f8dc0f, 0x00d3fa68dd1f72, 0x005a1d46d2150b, 0x0022bc2ec527f0,
    0x01fc1386281531, 0x0168385914089e, 0x012d1684c1e5c7, 0x01fdde57e61cfc, 0x01af864a801c4d, 0x003c10fb602c8a,
    0x013425ca524a43, 0x0003bb804d4ac8, 0x0010f3cc175d29, 0x001a90dc2fb736, 0x01875a0ab4fe7f, 0x0022d4033df3c5,
    0x0031eeab7b94a2, 0x00358e0dbf7e7b, 0x01346a8bff40a0, 0x01310e5a0dbc21, 0x00c1d7eff370ce, 0x004d62c2a70637,
    0x01fda7057460ac, 0x0119bc0586523d, 0x007d1b94e9b7ba, 0x004efe467c91b3, 0x0106aab8691219, 0x00666a7eff9566,
    0x011bc35a68dcef, 0x002dd375246704, 0x01ddc1cbd517b5, 0x00b4111390f5d2, 0x00e9f8c5a863eb, 0x011fc433f22550,
    0x01d955b9a33f11, 0x0187e35ee084fe, 0x0107d7df4762a7, 0x0121e7a8b0305c, 0x008f7b8482242d, 0x0081d84503aeea,
    0x0127753b9dd523, 0x00797938d9d428, 0x01aa4f69d22309, 0x010bbee98e9f96, 0x00132e398b775f, 0x01bafbfc071cb4,
    0x00489ff94157a5, 0x0045d43a004302, 0x001479eb73c55b, 0x01eb34b438d600, 0x00e0486e279e01, 0x01f58546ee452e,
    0x004ceb97f9fb17, 0x001fe3b2e48c0c, 0x00977ae6a2921d, 0x016c1dd7f1121a, 0x0006a0ce7d1493, 0x01fb73f6c08ad8,
    0x01ca0cd4718ff9, 0x00e141664fd5c6, 0x0178918e4fde64, 0x01f7976a6c7c32, 0x014636a7c8a2cb, 0x00c6a20b2e52b0,
    0x01d97a5299d8f1, 0x007fcaa7efb15e, 0x00ac9f91d5cf87, 0x00032e921c73bc, 0x01aea2f8d69c0d, 0x01e99de4b4e14a,
    0x01576207a15003, 0x013f2fd3cb8d88, 0x0109dff62658e9, 0x013327367637f6, 0x008b92d2b8e03f, 0x01f33988952b85,
    0x007dfdd338a162, 0x0197803f0dfc3b, 0x01ad3757ed9b60, 0x006ea543b8efe1, 0x00600d1077c98e, 0x0148fbc9b1dff7,
    0x00472f25cd41fd, 0x019491fd121c7a, 0x007fa643518773, 0x0168d6c68f7dd9, 0x011847c1f4c626, 0x0078ce2271aeaf,
    0x00cc1c137f85c4, 0x0056febbdabf75, 0x001cb1b587b292, 0x01b0f3816ad1ab, 0x01c87b8a51b010, 0x007bf61003e2d1,
    0x006888cdd98dbe, 0x01a64504252c67, 0x00e41c9782e71c, 0x00a3e965f583ed, 0x01e954dd8bc3aa, 0x00fb24a194bae3,
    0x01ba8c59fa76e8, 0x002c2b270bfec9, 0x00d2e8c77e8056, 0x00bfbb0cf5391f, 0x006d71617c6b74, 0x009cffd6b16f65,
    0x00ff93953cafc2, 0x00d1943ac6231b, 0x014fef3d86b4d7, 0x013f75b98772cc, 0x005e822f7e61dd, 0x0133e79d64d6da,
    0x001e977631ea53, 0x016d7790545d98, 0x01ef39d2badbb9, 0x01d0368c866686, 0x001784d47a7f8f, 0x00c90fd10b5d24,
    0x01eb1448283b55, 0x01c55568fa98f2, 0x0118e4a2c6f08b, 0x005e9393343d70, 0x01924cccd95cb1, 0x01924456361a1e,
    0x00094c19ed7947, 0x00f7f1083b8a7c, 0x0128046656dbcd, 0x009862dea0560a, 0x01aa71b8b015c3, 0x00d4d6603e9048,
    0x0099680d3f78b6, 0x01fdee63975ad4, 0x00d3a2650e2345, 0x00be81ca246e22, 0x011bf8ccd439fb, 0x0183a78321e3a1,
    0x01181a2596e24e, 0x0100f5553079b7, 0x0012654c2df1bd, 0x011953fe01413a, 0x005eeefe340ef8, 0x01aa74d8eba999,
    0x00c98f2c9cb6e6, 0x00513d5226406f, 0x01fe6fdf4b6484, 0x010d5d57f22735, 0x0123ef24dd2f52, 0x008c861814ff6b,
    0x015b6013adfad0, 0x002aef80124691, 0x00efb5b29d567e, 0x013df332e6b627, 0x00d936ff9e5ddc, 0x0072307072a3ad,
    0x012c68382b60a3, 0x0047bf5a6b9a89, 0x01db14e4512116, 0x01a1d92b7abadf, 0x0152da7f127a34, 0x00729f11234725,
    0x00479ee807dc82, 0x0178ee9f7040db, 0x01e5207a5f0b80, 0x00d9a65ae98581, 0x007291d45c76ae, 0x013d9eee672e97,
    0x012da30a23198c, 0x01274fa053f19d, 0x01c2b80fff5b9a, 0x018b2e86f68013, 0x00e6f731ecf058, 0x005fe174cfb746,
    0x004a31082cf14f, 0x012e5ba2979be4, 0x018308b54775b2, 0x016c48a98cfe4b, 0x01cea00596e830, 0x01531a3ca6a071,
    0x0179412ac8e307, 0x00c33b6503613c, 0x00dbeed6c0db8d, 0x0060bc11e28aca, 0x00bb59fc665308, 0x0113a4d4d59069,
    0x01f730954b7976, 0x01ac556933e3bf, 0x0161977e45c994, 0x0104c01468db05, 0x0065d190fefae2, 0x01756218d237bb,
    0x012f539a7090e0, 0x011136d0089761, 0x01e9d4bc10bb0e, 0x014a6c62e2d377, 0x0056d3510a34ec, 0x01887c2c68617d,
    0x00b486707725fa, 0x0136fe334ab2f3, 0x00de725e5701b8, 0x0141665f3d9559, 0x011411a3b767a6, 0x0174045f46922f,
    0x0175c4cb480344, 0x0169468bdb4ef5, 0x0167ef12516c12, 0x01dbbfdb66ed2b, 0x012fb2318e6a51, 0x00cc9949ebdf3e,
    0x016513594bffe7, 0x000e82ebc2949c, 0x014bc3c7b9836d, 0x01c1a5fe402d2a, 0x0064744921c663, 0x012bad77f9fc68,
    0x0145b9e3b0f649, 0x011c3dfadbfc9f, 0x00fb54778948f4, 0x01cc9a0456dee5, 0x0022369321c942, 0x0009995b321e9b,
    0x01d6b3b9354640, 0x00dc95df771941, 0x01f0725c4baf6e, 0x00de5b885b6857, 0x014234df77804c, 0x018ca96880a05a,
    0x00819e63ebc806, 0x006514bc2b230f, 0x01d72555b49aa4, 0x00d05860131272, 0x00f1cfeddacc0b, 0x006767611652f0,
    0x01ed23a9c1a431, 0x003b8c04032b9e, 0x0170401333f7fc, 0x01e6f44dd49b4d, 0x00e6f0673b7f8a, 0x008e38dd0ce143,
    0x0025ce3f02d5c8, 0x01aec948f5cc29, 0x001943cd34f854, 0x00f409d26552c5, 0x019f46e88847a2, 0x01f8e244c7f57b,
    0x01a8c120a553ce, 0x01a175b088ed37, 0x00490d5ac2fbac, 0x005acf3a3c913d, 0x005068ed33caba, 0x007966289eb478,
    0x01e02689454119, 0x013ee6cc04d866, 0x01fec67f92a3ef, 0x01a8358a356204, 0x0075d9035636b5, 0x010b09eea468d2,
    0x0027dbdd209aeb, 0x00ad9ffa5cd050, 0x0006400c384e11, 0x017cc926af8b5c, 0x00923857ec81ea, 0x014c92a258df28,
    0x016e52629c1209, 0x01bd2ced9ea296, 0x007cbea0d8fe5f, 0x0162b2cc0c36a5, 0x00d8485e384100, 0x00e2804d226d01,
    0x01b16460b5a82e, 0x019a5da9236217, 0x0075509fa8a51a, 0x006a1e8aaeeb93, 0x00f8c0e82c55d8, 0x00af58e5193ef9,
    0x0128705e9a98c6, 0x0062d3063514cf, 0x0162a1fd225964, 0x00412940965295, 0x01ab7e3a1d6f32, 0x0187f3617059cb,
    0x01f8da64727db0, 0x01621bdbea67f1, 0x01a0a5fd09d45e, 0x0189b48f521b0d, 0x01b7f1876b344a, 0x00859063dae703,
    0x01d3dcee9de73f, 0x00bb7c9ac38a85, 0x00a41b3275733b, 0x004a6c314f3ee1, 0x007cd26014ac8e, 0x000addbbe2c6f7,
    0x00fca9a954826c, 0x01a3ec8202de73, 0x01a98a46c2acd9, 0x01972d0a450926, 0x013796a8ca75af, 0x0157c18ed380c4,
    0x00d0a92a22de75, 0x001a00ef0208ab, 0x00c8ecb7cff1d1, 0x012e5b432930be, 0x00270f3b25421c, 0x013740aba482ed,
    0x000969c12dd1e3, 0x002ade43998356, 0x00c6100331c01f, 0x00b4d744192674, 0x01011144034e65, 0x01c919b827fbc0,
    0x006aa3bbab80c1, 0x01b3da4e5a60ee, 0x003b75ae7f1bd7, 0x01f24ac34a8dcc, 0x01d75f682f20dd, 0x013c7d6e3769da,
    0x00d8b93122c153, 0x01fa240a532898, 0x008ea0d2398ab9, 0x0101c1299c2986, 0x00bb5ebc0ac68f, 0x01c74b6ba0d824,
    0x0025c33373da55, 0x013606d4268bf2, 0x000ff7b60da78b, 0x012fe75ae0ebb1, 0x01c8ba5b71a047, 0x018951cecf657c,
    0x01661bdb31a90a, 0x00557b8568acc3, 0x004162d29a1b48, 0x01444cb98783a9, 0x018131a47ffbb6, 0x01d32bd2d595d4,
    0x01615b29438245, 0x01e2ea839ab0fb, 0x0118356614a120, 0x011b7e752f32a1, 0x018c09577ec92c, 0x014d3285469433,
    0x00d109d69c59f8, 0x0124804775d899, 0x0126b790ae076f, 0x0059812c014635, 0x00a96ff6e6a252, 0x000e49ddfea5d0,
    0x004df1de97f97e, 0x01509d23d25d27, 0x0073f53fc8a2ad, 0x014dae7bc377a3, 0x00ab01bf94e4a8, 0x00f46c80638989,
    0x013986c7a641df, 0x01a9421db23534, 0x01a80307fc2625, 0x018314adc80f82, 0x0078be6a8637db, 0x011683d5c47680,
    0x00ef4002d25481, 0x01b3d551f9d9ae, 0x016ecbb62e9597, 0x019e410749348c, 0x01b9dcbe6bb09d, 0x01aafa4cecee9a,
    0x010ff7a7a65713, 0x000ab54f7ebb58, 0x018728026f9679, 0x01ee2149b07a46, 0x01ddba736c384f, 0x00f9a033f016e4,
    0x01328a3f432215, 0x0139917eee68b2, 0x0003ad5d72b54b, 0x005c5c6e652f71, 0x006cdac31765de, 0x01351371ba3c3c,
    0x013ba9408a5a8d, 0x00c7761114de08, 0x016cb1f578ff69, 0x0028c40116fc76, 0x00b51090f6eabf, 0x01d7edf9a53a05,
    0x007399270f7be0, 0x01e776258ce661, 0x00eed962839e0e, 0x015e12c2b1ba77, 0x005b223ad3a07d, 0x006afdd89238fa,
    0x017f06fd7a09f3, 0x00efd0fb1ec459, 0x0077281b9daaa6, 0x01a220f4b16df5, 0x01c929c455df12, 0x015a09e0c87951,
    0x009a2f9f91823e, 0x00c9c97246a6e7, 0x016760dbaaef9c, 0x001feb333a002a, 0x00d4d75ff20768, 0x003213b9f784d6,
    0x01a0d753f6839f, 0x016bbb73b6bde5, 0x012bb81427159b, 0x01dec385cdb140, 0x004156ba56e841, 0x006f003b009b4c,
    0x017f4c7489335a, 0x00ac2c27f9acd3, 0x010c4f1e6f0e18, 0x00730bc57b6239, 0x013a0803978b06, 0x0169b882196a0f,
    0x006c904b350572, 0x00a01c11337df0, 0x0141031e373331, 0x01a67a099e4e9e, 0x010621f7c51a4d, 0x000675ffc37843,
    0x0090dfd10460c8, 0x0017789e303b29, 0x01d48556b0bd36, 0x0128fa135d0c7f, 0x0066c18a793354, 0x0172f73c80faa2,
    0x00c2a129d716a0, 0x00d91dba285a21, 0x011c96fd9d96ac, 0x014f273e2cff78, 0x0155fb78361b66, 0x00692afa525d04,
    0x011a5bc3a3dbd2, 0x00ac2fb4937b50, 0x00be7a6da95d11, 0x01cb673d3ae65c, 0x01465d5f2e222d, 0x01ae89de4154ea,
    0x01210db1c20109, 0x006b65c3daa596, 0x0057d5cde2855f, 0x015933d180a902, 0x0022739d9fb35b, 0x01d3b65703ac00,
    0x00a46b39f93c01, 0x0054a90e290b2e, 0x00fc090388c917, 0x00b5b15930c20c, 0x001a73ddcc381a, 0x0199e32b1cedf9,
    0x0096935c115bc6, 0x0129bafdd25bcf, 0x01e8c090b6f195, 0x00d2a92b9410cb, 0x00b6342782a8b0, 0x01dc5d78cff75e,
    0x01042f638d874a, 0x0184436c107e03, 0x007fff6928a388, 0x01daef0f0de985, 0x01c94af2b40762, 0x01f9c75d58ea3b,
    0x00f2035d2b7160, 0x00c3a16ac18de1, 0x0176d87ea3bffd, 0x0080a85948427a, 0x01841f73b03573, 0x007a90006c7238,
    0x0101fcfdc14c26, 0x018a2619df3caf, 0x00fb3d91337bc4, 0x0012044986fd75, 0x013b9c25909892, 0x00b5337b153fab,
    0x01836fffd90610, 0x005289ea7800d1, 0x005e634524d3be, 0x005472121a7a67, 0x01baae71ef81ed, 0x0080d1d37f69aa,
    0x0110539929dcc9, 0x004debdde08656, 0x00282858c1e174, 0x00aa4299794fc1, 0x00480de038c3ee, 0x0130b744b382d7,
    0x00ae6a1c99a8cc, 0x019021b49df398, 0x00c47f031439b9, 0x01d24817ddec86, 0x017f9ba3425324, 0x00b7504b3e7ef2,
    0x00600af5d05e8b, 0x0141fe31c47ab1, 0x0119679931c747, 0x001d81f637d9cd, 0x0139319d2efc0a, 0x00f41cf041a648,
    0x017281f4eff2a9, 0x0020c27fec7eb6, 0x00d66c0a1fd0d4, 0x01ed187e15d422, 0x0063838ddd27fb, 0x013e366fcc8c20,
    0x01d426c36c47b7, 0x01703e231f642c, 0x01dd171cd26fbd, 0x015c3c9b6d673a, 0x00a646e532eb33, 0x01de979550a4f8,
    0x01330feb855a84, 0x0144546d2c6535, 0x00ec33dadc1552, 0x00de8767fd6d6b, 0x009807633e9c7e, 0x014b0e5905efa8,
    0x001ef5dcc92716, 0x0131971a5df034, 0x00b2c47af10525, 0x017dcf57f5e180, 0x00f0b17f31fc97, 0x008eecfffb4f8c,
    0x00b725881f6f9d, 0x00a2281846819a, 0x0104ac65522e13, 0x0110a9dd214579, 0x015ea453677f4f, 0x001a2e8e5491e4,
    0x009a6792f1c115, 0x0028d559d46c4b, 0x005d9b64ffbe71, 0x016eac043388de, 0x01e6ac562730ca, 0x00edd5f3a9c983,
    0x011418e2786e69, 0x00ee0dfd0e7f76, 0x004004e475f1bf, 0x007aea8a9925bb, 0x004056beed3561, 0x01153f91bca177,
    0x003ad312dadf7d, 0x016e2b15194bfa, 0x00e7c49d70202f, 0x01a7bdfc07f944, 0x00f0de94465212, 0x0185240f8d5b2b,
    0x0151f3b01a5b90, 0x01f70912de8851, 0x00232f19e3253e, 0x00b148517d4de7, 0x0088cd681f4a9c, 0x01a48b904f816d,
    0x0065fb7f9fd32a, 0x00929e184bf463, 0x00360195361268, 0x008984a42ad449, 0x01228a555487d6, 0x004dca86cd0a9f,
    0x01e3eaccdabef4, 0x00d8cc1b329ce5, 0x01d91fca980c9b, 0x00d3171712b741, 0x0155693e15b64c, 0x00a35e02dfd918,
    0x0148c28c6f4e06, 0x0184de18c3b10f, 0x00858d0bb9c8d5, 0x01077bd388c231, 0x014d9199e5719e, 0x011b3c7736258a,
    0x01197de651ebc8, 0x016239bbc6aa29, 0x002aa7c6334036, 0x00c3de67c96e54, 0x00fe2dadf501a0, 0x0174895f0bf0ba,
    0x01c3c012074a78, 0x00d126c1119f19, 0x006379b3935e66, 0x00eb88757b5804, 0x00b88ac28f4ed2, 0x017e3312962650,
    0x000ade65d26dfe, 0x002d47080227ea, 0x018cf14743f009, 0x00c2516df5f4a5, 0x00025be4efaa5b, 0x00daa724ac0b01,
    0x00a9267f486e2e, 0x00573ad1a8dd0c, 0x01f75dd853cf1d, 0x01b2538eb41ec6, 0x002db1ddeb4f64, 0x018f76a3f39095,
    0x013d1109435532, 0x0132dc7633c7cb, 0x001587045ed3b0, 0x006be0451f85f1, 0x0148a646694487, 0x013580901304bc,
    0x01b498541d190d, 0x00b429a91bda4a, 0x01ef3d90421503, 0x00ba9d42c92e88, 0x015d10901ac0f6, 0x00c77ff19bf53f,
    0x009f0148bf5d14, 0x01b36be6d3ba62, 0x0071452fb8613b, 0x011262f6fc5c60, 0x01d22935f894f7, 0x013457d65bb86c,
    0x01e147d205557a, 0x0064fd4759bd38, 0x011b01e5b003af, 0x011294ca9f76c4, 0x01c11996770b92, 0x008514ba4eb110,
    0x00d93f97fc0fd1, 0x00a4e29e6f2167, 0x00a823000df81c, 0x013ae73dc2cbc9, 0x013f7ec6538956, 0x01652ec4dece1f,
    0x007f354f769c74, 0x0055aa4efb0c65, 0x017daba01048c2, 0x00459ff1231ec1, 0x01b83d01c326ee, 0x018faa7574c3cc,
    0x01b32e18649edd, 0x01bf523f34be98, 0x010a24874baf86, 0x00609d27efce24, 0x0128bdfe4271f2, 0x01d092d20f158b,
    0x0182a0363dbe70, 0x01a9c23509831e, 0x00852f432dee47, 0x01c21bdc1258cd, 0x017a2654984f0a, 0x015d9366cddac3,
    0x00685fcf8501b6, 0x01eab47d2896ff, 0x0192a8fc024045, 0x00053e4e708722, 0x01c9cb5a507720, 0x013f5fa0ddd0a1,
    0x0157d5a29e3699, 0x00776a45f27fe6, 0x011dec51f1956f, 0x01f9ad2e345584, 0x01bc1f00bd8852, 0x003b308603fbd0,
    0x002ca6d8af7391, 0x0157bd70913f7e, 0x00a3ca0448a0ad, 0x00c53fa7676789, 0x01293da8472a16, 0x00ab525a01e425,
    0x004976880c7582, 0x0182aeb0f34c80, 0x004d4f5437f281, 0x0026f500389fae, 0x00aeada4396a8c, 0x01ca47a20c149a,
    0x0166332ffa0513, 0x01370a8a004eb2, 0x00ce250eb2234b, 0x01bf25c3796930, 0x002d4033fbabde, 0x009499edb65807,
    0x011e7a8ecbf23c, 0x00fe0fa26b83ca, 0x0090888fd96083, 0x01d8618bd3dd69, 0x01b503b9320276, 0x00341bd3b0f8bf,
    0x007c557cad7a94, 0x00f1414271f805, 0x01a7470efc13e2, 0x001d455ab69cbb, 0x0158e146b151e0, 0x00141b146d640e,
    0x0104fbc29505ec, 0x003ec3a47e1e7d, 0x01c56c560c5efa, 0x012e12c2ccb7f3, 0x01816a01ace2b8, 0x004d0092f9f444,
    0x0151f731b1abf5, 0x0157b39b5a922b, 0x00814f14760690, 0x015001b7d09751, 0x00a10ee8e0c83e, 0x001bb3411fa59c,
    0x01e4d2d984806d, 0x013a611371a62a, 0x00a69d63f1c349, 0x0037c4d6dd8ad6, 0x00a7f9035f919f, 0x01edaaeaca7be5,
    0x006168d1576242, 0x00170207628740, 0x005fc4e5aa8641, 0x00e7a698b6d14c, 0x0089872e731106, 0x0135bdde2b0ba4,
    0x01150d5ddcf10b, 0x016900aad1d3f0, 0x018217b9b65131, 0x00d421e4d8949e, 0x01507013c281c7, 0x01fb9fff7a184d,
    0x0035ad7b55788a, 0x007cf62eeb76c8, 0x01c2403af51a7f, 0x01cb631525a954, 0x010380e93660a2, 0x01d72b4ec95a7b,
    0x00248019b2f821, 0x014d0eebf6ccac, 0x0178531a074e3d, 0x0196b8d89a03ba, 0x01708a542d9578, 0x01e5f2ae1ca166,
    0x003d8b0777f8ef, 0x006edb1b66c1d2, 0x01dd5ef2713feb, 0x01f729c464d150, 0x0072a71d1f7b11, 0x0030ab697b10fe,
    0x0099c7e3e5fea7, 0x00d36cb9ee3123, 0x0007b9d69e0028, 0x0148d1a6b608b4, 0x00f8bb1d14d3a5, 0x0020469cb10f02,
    0x003b91fd3ada01, 0x0180244dacf80c, 0x0145e47d575e1a, 0x00d9b3dd2c7093, 0x018a766a4c2f95, 0x0040d1b14f7ecb,
    0x009d8343126b87, 0x00d87288162d4a, 0x0000abb8b4fc3f, 0x00ee1dc59e9814, 0x01df151993d83b, 0x01b40335994760,
    0x003f219ddd7bf7, 0x019a052ffee373, 0x01d7d068930838, 0x01a95fbb8439d9, 0x00846f7c3ccaaf, 0x015e8beb1771c4,
    0x01f8198154531c, 0x0016bb670aa2e8, 0x0129f6cad97bc2, 0x01cb89b2a8edc1, 0x01c3a9a0d050d7, 0x00a004c7239b8f,
    0x009daca9a94924, 0x0174c3bac9cc8b, 0x0107c65b7a71c3, 0x006cc59cd4d0a9, 0x015f0ec34984b6, 0x00dd5790d846d4,
    0x010c2d5cd615fb, 0x0197476f3c6599, 0x0063f31211c2e6, 0x006c51b4ad5c6f, 0x011bd5988afb52, 0x001c2cc3b8a6d0,
    0x008d7c33fd5227, 0x00904f33fbc9dc, 0x00d5dbd9729fad, 0x00e970efcc05a8, 0x00a4a24e90d6df, 0x014042fc90a882,
    0x010024d4b01cdb, 0x002d8d90bcb780, 0x01a9a5d4ecca97, 0x01d949a403858c, 0x01c01f1a3da79a, 0x000532779ddc13,
    0x01c501da98a379, 0x002869375ac346, 0x00820f31920d4f, 0x003f1b5e4187e4, 0x00f6e6b1079430, 0x01ee3760c8dc71,
    0x007212a01bd6ca, 0x00082df004f783, 0x01c48b9ae87f08, 0x001b09d97dc6e2, 0x00ee9a7a5013bb, 0x00aa937d41d361,
    0x01750a3d866f77, 0x016393b630a0ec, 0x0152dfcb6b71fa, 0x003affb20c2db8, 0x00e04792ea5159, 0x0121a3d65873a6,
    0x01c1212689ae2f, 0x0054b8e5dbcaf5, 0x012c675da3c92b, 0x008e3b909db190, 0x01ec063c8a6b3e, 0x00de32fb557f6d,
    0x00b9a86f662263, 0x00ec984e14b249, 0x00a7506e928dd6, 0x0004aefae3ec4c, 0x0199c0a4a56f18, 0x013ecf19a2d406,
    0x0007e4784c3f0f, 0x00c393206a86a4, 0x01d6be98f906d5, 0x00eb8579e363fc, 0x00d4423d3e974d, 0x0162e8bce0cb8a,
    0x01d32227cf3d43, 0x01c0b9325b217f, 0x00e24aa1f313a2, 0x01c4f058688937, 0x007e77564dfd19, 0x0022b797d1e466,
    0x01397d0791bfef, 0x00687cb3d976eb, 0x01cc6bbdcfb3fe, 0x015ef7f424f75c, 0x01a1ad05c7cdea, 0x0029d674784823,
    0x00eab1055bce09, 0x013df51396ae96, 0x00685fa04fb2a5, 0x006bc3adab4202, 0x00732d8003985b, 0x007f49b3a5a901,
    0x01c2947d3d130c, 0x01ad8af62b4d1d, 0x00e32e9d4ffaf9, 0x001323b11230cf, 0x0044aad3c0ce95, 0x00a1d158193b32,
    0x010f9e1cc8babc, 0x018a632358170d, 0x00d1b983ee4488, 0x0017fda80983e9, 0x01ece0438a033f, 0x00da0b87d72062,
    0x0013778aeb4f3b, 0x0199c7c9023260, 0x0124f23e407ae1, 0x015f6648c37b7a, 0x00e1f4daa03a73, 0x01e35314185338,
    0x013ab8bb3e1526, 0x0104a7a29b6cc4, 0x01b2572e5b5a75, 0x00372828787eed, 0x01259c2016e2aa, 0x0168db636a2de3,
    0x008c8dce0abcc1, 0x00e25946b8b7d7, 0x00842e070a1cdd, 0x015302a9ab3586, 0x0077f6d80e57f2, 0x017c3b9bda3c47,
    0x017d7563aef50a, 0x00d6662d004748, 0x0022948b3a07b6, 0x00db3cc7f4a4ff, 0x01ac17cbe9ed22, 0x0146df018c8cfb,
    0x00d2176bfc6ea1, 0x013dc165f6514e, 0x00e7ca9907fcb7, 0x00895f4749352c, 0x00400386b9a03a, 0x0039499cb64b84,
    0x0104c3dd3951d0, 0x0085178a7124dc, 0x00484ac5b613db, 0x018610ac3db313, 0x004befdd5e5279, 0x01815333ca02e4,
    0x00f1d4b0a59e15, 0x01cb03f061bf30, 0x019012460da83c, 0x01f217455b06bf, 0x00657d6eeb79e2, 0x005d0a59658abb,
    0x014953598327e0, 0x01c89b82362261, 0x000fc92e01ea44, 0x00eacd9321e9f5, 0x017b0c44e00e3e, 0x01eadbf48942e7,
    0x015e14d1594c2a, 0x00a47be5ed3963, 0x01730ec24e39e5, 0x009ce254275d40, 0x01dce4d52d9e6e, 0x00a9e6f8a36b57,
    0x007839149d074c, 0x01c92e5574fc5d, 0x0154432bc61e39, 0x019b3a2a42a5d5, 0x00d157444a5f0b, 0x0139d494aacfc7,
    0x0076506bd81e8a, 0x01994ab436487b, 0x01fc444f16c2a0, 0x00ee8fee767037, 0x01aeba45efcc3d, 0x000f5d3cfa29ba,
    0x01545353ee9bb3, 0x006ea0093e4904, 0x015b59357fd1b5, 0x00eaeb48059911, 0x01b4c692d056fe, 0x01f979339d4ca7,
    0x005d934ce0525c, 0x018a8dfd481628, 0x01a22d0df1bd09, 0x00d58e1b917502, 0x018e1f0e295800, 0x000d7348ae972e,
    0x0088d87a810c1d, 0x009f1f45a467c6, 0x01c958fb9f77cf, 0x01b03d86f2c064, 0x013ebed0516d95, 0x01640107662e32,
    0x002969fd18b987, 0x0095f8d24ed34a, 0x0047af04beda03, 0x01da6cf3bec63b, 0x00c1bc0722c9e1, 0x01c152cf391b8e,
    0x0167bf3b6a5826, 0x018f2ca12b67c4, 0x000d52722f7975, 0x01a9650cb26492, 0x00dbaa8bcb5fbe, 0x00e28598d51667,
    0x016b153185091c, 0x00f19344ef44e3, 0x01c2db34b49256, 0x004a12fb2fe1c2, 0x01450fa46a4fee, 0x0087d45d4e14cc,
    0x01479aa69af453, 0x01562600c11f98, 0x00d12864403f24, 0x00a34cee91f555, 0x001fb271b33a8b, 0x019faafbe8ec1e,
    0x00c1f72a8a6347, 0x00d29fd7d7d248, 0x019bdfc629aea9, 0x00e77657568ab6, 0x00c5ac0cf4abff, 0x018ef677c0bcd4,
    0x01a4fbd908a022, 0x00130aa555bda1, 0x01c31d46b3e3b7, 0x0046c8216b6bbd,
];
