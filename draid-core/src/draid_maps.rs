// vim: tw=80
//! The frozen permutation seed table.
//!
//! One entry per supported child count.  The seeds scatter group
//! columns evenly across the children; the checksums authenticate
//! the generated maps.  Every entry is part of the on-disk format.
//! This file is generated.  Do not edit.

use crate::permutation::MapEntry;

pub(crate) const DRAID_MAPS: [MapEntry; 254] = [
    MapEntry { children:   2, nperms: 256, seed: 0xb83c427f234bd27a,
               checksum: 0x00004f235c408d9a },
    MapEntry { children:   3, nperms: 256, seed: 0xe6771779ddb36804,
               checksum: 0x0003e879bcb69d89 },
    MapEntry { children:   4, nperms: 256, seed: 0x47f43993e52281e8,
               checksum: 0x0011d85a2f22a8c7 },
    MapEntry { children:   5, nperms: 256, seed: 0xc6602a4e4d2051f1,
               checksum: 0x003d2773690763c2 },
    MapEntry { children:   6, nperms: 256, seed: 0xd462a04425a64067,
               checksum: 0x008e820651419adc },
    MapEntry { children:   7, nperms: 256, seed: 0xb9145325fab4f1d8,
               checksum: 0x011cade1b0e23b96 },
    MapEntry { children:   8, nperms: 256, seed: 0x573fb5e63f5081fb,
               checksum: 0x02562b22e55dce15 },
    MapEntry { children:   9, nperms: 256, seed: 0x8c87329cdb093e75,
               checksum: 0x04737ef1e0506aee },
    MapEntry { children:  10, nperms: 256, seed: 0xa84cf1b4ed82ac83,
               checksum: 0x07b7a883c7d01be8 },
    MapEntry { children:  11, nperms: 256, seed: 0xe64469a0f69fef5c,
               checksum: 0x0c577c892db5cd00 },
    MapEntry { children:  12, nperms: 256, seed: 0xad2aecc2fba546ed,
               checksum: 0x132632b79c89834e },
    MapEntry { children:  13, nperms: 256, seed: 0xf327d84e03f095a1,
               checksum: 0x1c6288ad6bf91694 },
    MapEntry { children:  14, nperms: 256, seed: 0x7aadd91ad9808801,
               checksum: 0x28eb2e11b7f3f06b },
    MapEntry { children:  15, nperms: 256, seed: 0x8075c791ab06c385,
               checksum: 0x3949c2ad1fe56b15 },
    MapEntry { children:  16, nperms: 256, seed: 0xe3ab6d09536d2aad,
               checksum: 0x4fdfa410e5bed96c },
    MapEntry { children:  17, nperms: 256, seed: 0xf05a6245983d0147,
               checksum: 0x708e633607eade9d },
    MapEntry { children:  18, nperms: 256, seed: 0xf29b80793611b664,
               checksum: 0x989070b5fa4bee27 },
    MapEntry { children:  19, nperms: 256, seed: 0x3d895de8ae54ebc2,
               checksum: 0xc3577e9fc804054f },
    MapEntry { children:  20, nperms: 256, seed: 0xf805965d307a2428,
               checksum: 0xfb076b3297c59806 },
    MapEntry { children:  21, nperms: 256, seed: 0xbab1764bc4ebfe40,
               checksum: 0x461199373880afdf },
    MapEntry { children:  22, nperms: 256, seed: 0x9b95686a90dbed93,
               checksum: 0x995eb10e8697e7d2 },
    MapEntry { children:  23, nperms: 256, seed: 0xcb4e1ece737c9ad5,
               checksum: 0xedb37ec92d18dbc7 },
    MapEntry { children:  24, nperms: 256, seed: 0x9c17670a06749bb6,
               checksum: 0x7a01a9911a275593 },
    MapEntry { children:  25, nperms: 256, seed: 0xf72470fb5f045fbd,
               checksum: 0xf96e843f12eb98e9 },
    MapEntry { children:  26, nperms: 256, seed: 0x146adc404f642209,
               checksum: 0x98cb6762dcf6b44e },
    MapEntry { children:  27, nperms: 256, seed: 0x3e42207d4161bdb0,
               checksum: 0x71f6cebadb6e7e0a },
    MapEntry { children:  28, nperms: 256, seed: 0x0fe58b7d8cf00714,
               checksum: 0x6be1a5190ef8b9f9 },
    MapEntry { children:  29, nperms: 256, seed: 0xe923e2506b47c1d6,
               checksum: 0x607803426d30c24c },
    MapEntry { children:  30, nperms: 256, seed: 0x23754e1103617aa1,
               checksum: 0xac29630bd9ae7f9d },
    MapEntry { children:  31, nperms: 256, seed: 0xd777ba9f0450c333,
               checksum: 0xc2a2910b294b04ae },
    MapEntry { children:  32, nperms: 256, seed: 0x73e22f61f87b044b,
               checksum: 0x9db6059f376ff042 },
    MapEntry { children:  33, nperms: 256, seed: 0xc25489e41ebd01b0,
               checksum: 0x202d957e4a930a9d },
    MapEntry { children:  34, nperms: 256, seed: 0x129c06cb54a66aee,
               checksum: 0x66d25c17a649dacd },
    MapEntry { children:  35, nperms: 256, seed: 0xfaaf9aa1e0d9dcb5,
               checksum: 0x3052b8e61450fa35 },
    MapEntry { children:  36, nperms: 256, seed: 0x50dc6fb0fb8d14b0,
               checksum: 0x886b7a949aea27d8 },
    MapEntry { children:  37, nperms: 256, seed: 0xcb89d1914b3a7cb8,
               checksum: 0x8c7aa8592b3de9c4 },
    MapEntry { children:  38, nperms: 256, seed: 0x7feea27b40cc0f6c,
               checksum: 0x0121b9c2dea3eb86 },
    MapEntry { children:  39, nperms: 256, seed: 0xa18bce16bae99a09,
               checksum: 0x476f436068f35f99 },
    MapEntry { children:  40, nperms: 256, seed: 0x5322197a2e4c03b3,
               checksum: 0x9a61c4078fd86329 },
    MapEntry { children:  41, nperms: 256, seed: 0x8d00261f8b025669,
               checksum: 0x2a2a0440747c9638 },
    MapEntry { children:  42, nperms: 256, seed: 0x94100c2f1b7a3851,
               checksum: 0x35126b357a2bd895 },
    MapEntry { children:  43, nperms: 256, seed: 0xfd37da2448fa3813,
               checksum: 0x7fe8169b92646c6a },
    MapEntry { children:  44, nperms: 256, seed: 0x6f5abc2c18ef5cd0,
               checksum: 0xf9fe384e4edf86d6 },
    MapEntry { children:  45, nperms: 256, seed: 0xe62b76e157934b22,
               checksum: 0x8bedd51d09180403 },
    MapEntry { children:  46, nperms: 256, seed: 0x4c46f73f7cfc40de,
               checksum: 0x02f45eacf755a2b6 },
    MapEntry { children:  47, nperms: 256, seed: 0xd71b0e8ab49a75fa,
               checksum: 0x38a89afb540930fc },
    MapEntry { children:  48, nperms: 256, seed: 0xcdb1ddc2ae634126,
               checksum: 0x2c9679dcd0a2c6bc },
    MapEntry { children:  49, nperms: 256, seed: 0x3b8aa89b4f4cbf6f,
               checksum: 0xc304d8898169d16f },
    MapEntry { children:  50, nperms: 256, seed: 0x2cc848d9cdaf1c12,
               checksum: 0x8e61819f5a9d4ab6 },
    MapEntry { children:  51, nperms: 256, seed: 0x464fe01dc629d1b6,
               checksum: 0x0513b9d7dfcfddf5 },
    MapEntry { children:  52, nperms: 256, seed: 0x54227ba148d5db9b,
               checksum: 0xf1000e54a6a4ecec },
    MapEntry { children:  53, nperms: 256, seed: 0x188f4d22a0bc4a93,
               checksum: 0xd75f560d077b71be },
    MapEntry { children:  54, nperms: 256, seed: 0x78ee2e8219a524f1,
               checksum: 0xab20bc768080d552 },
    MapEntry { children:  55, nperms: 256, seed: 0x3eb8386644332103,
               checksum: 0x1304432a6ce95ad1 },
    MapEntry { children:  56, nperms: 256, seed: 0xe7815e15ae6503f3,
               checksum: 0x97ccb419e99b5a86 },
    MapEntry { children:  57, nperms: 256, seed: 0x8c498e470af86fd7,
               checksum: 0x34a0ebaf1b6874a2 },
    MapEntry { children:  58, nperms: 256, seed: 0x850826753314388d,
               checksum: 0x2d89ce5f8d818d09 },
    MapEntry { children:  59, nperms: 256, seed: 0x4552147f46379ff3,
               checksum: 0x71c7b5234e9269e1 },
    MapEntry { children:  60, nperms: 256, seed: 0xe5a966a642428e6f,
               checksum: 0x3437d1b36bfbb188 },
    MapEntry { children:  61, nperms: 256, seed: 0x928f5a2718f31dd6,
               checksum: 0x544737491a76864c },
    MapEntry { children:  62, nperms: 256, seed: 0x5599552a6fc20eb3,
               checksum: 0xe338c40f2ef5bb70 },
    MapEntry { children:  63, nperms: 256, seed: 0xe89c560f7b9acfdf,
               checksum: 0xc1d5006895328231 },
    MapEntry { children:  64, nperms: 256, seed: 0x4a5304efa546ef7e,
               checksum: 0xe73b79e93f0c416f },
    MapEntry { children:  65, nperms: 256, seed: 0x36b29c58471bfe48,
               checksum: 0x33c85c2a4b986c97 },
    MapEntry { children:  66, nperms: 256, seed: 0x3337014ddb815915,
               checksum: 0xf56d94e89ad634e6 },
    MapEntry { children:  67, nperms: 256, seed: 0xdcc500d83c0c8326,
               checksum: 0xdd7a4fdad4fa2a53 },
    MapEntry { children:  68, nperms: 256, seed: 0x6382115227e9f1ed,
               checksum: 0x4e796a5c2e983a36 },
    MapEntry { children:  69, nperms: 256, seed: 0x464e60715090f9f4,
               checksum: 0x225acd82c17d40db },
    MapEntry { children:  70, nperms: 256, seed: 0x0c042e49e341f97c,
               checksum: 0xeddab611cf2841eb },
    MapEntry { children:  71, nperms: 256, seed: 0x74d43db4eed0f9c6,
               checksum: 0x6465afe818bfafd1 },
    MapEntry { children:  72, nperms: 256, seed: 0x046eb4cb4b17df31,
               checksum: 0x6d2a0549e02133ef },
    MapEntry { children:  73, nperms: 256, seed: 0x511dc80d7de26ed2,
               checksum: 0x26dd7280db8b4b7c },
    MapEntry { children:  74, nperms: 256, seed: 0x08c240ce69fc7e5a,
               checksum: 0xab96213fc5a59d48 },
    MapEntry { children:  75, nperms: 256, seed: 0xa61bd9a96d87cd93,
               checksum: 0x240842c9c661cef4 },
    MapEntry { children:  76, nperms: 256, seed: 0x6917aea5ccc59a97,
               checksum: 0x46882f5fa8305938 },
    MapEntry { children:  77, nperms: 256, seed: 0x349d8061bae93740,
               checksum: 0x6540ffb3a9ea74bd },
    MapEntry { children:  78, nperms: 256, seed: 0xc8161101d94d73a8,
               checksum: 0xe55751996950c221 },
    MapEntry { children:  79, nperms: 256, seed: 0xdcdb1754e959a9d4,
               checksum: 0x2568acc04e610b95 },
    MapEntry { children:  80, nperms: 256, seed: 0x7e1e43936c0718ef,
               checksum: 0xb3819d3d984fc9a1 },
    MapEntry { children:  81, nperms: 256, seed: 0x85983fe2485632ab,
               checksum: 0xbd010fa8d2d2b58e },
    MapEntry { children:  82, nperms: 256, seed: 0xcd138b253f16c28a,
               checksum: 0x34024f8d920cd4ba },
    MapEntry { children:  83, nperms: 256, seed: 0x76bafdbfe30fdc0b,
               checksum: 0xf16945e327dc6fb3 },
    MapEntry { children:  84, nperms: 256, seed: 0x7f0a2fe4d0dd3435,
               checksum: 0x5a4c711d4f7c16fe },
    MapEntry { children:  85, nperms: 256, seed: 0xf78ed48f387a06fa,
               checksum: 0xf88eea069a8d7b5a },
    MapEntry { children:  86, nperms: 256, seed: 0x88760afc65053f35,
               checksum: 0x96854c67e4cfe1bd },
    MapEntry { children:  87, nperms: 256, seed: 0x43c1e1ced38e29fb,
               checksum: 0x9d6bdd2eb1b4eeb2 },
    MapEntry { children:  88, nperms: 256, seed: 0xe12eff6057fa7a2a,
               checksum: 0xedd7a3e9618131a3 },
    MapEntry { children:  89, nperms: 256, seed: 0xafd34de65c2a63dc,
               checksum: 0x57682e8d644380d4 },
    MapEntry { children:  90, nperms: 256, seed: 0x468b1fee43de3e4f,
               checksum: 0x5ff790e8fdc2f563 },
    MapEntry { children:  91, nperms: 256, seed: 0x61d66968a5140218,
               checksum: 0x96a3fbef0b3888d1 },
    MapEntry { children:  92, nperms: 256, seed: 0x1e81b5d6c8f7e740,
               checksum: 0x27052bc79c630241 },
    MapEntry { children:  93, nperms: 256, seed: 0x2e25ef52b17e6878,
               checksum: 0x0085e3051c1929a9 },
    MapEntry { children:  94, nperms: 256, seed: 0x2c6324ede9c7f99e,
               checksum: 0x4bc313d12e3d0688 },
    MapEntry { children:  95, nperms: 256, seed: 0x477b1c65b6be8415,
               checksum: 0xb18d6b592ab2dd84 },
    MapEntry { children:  96, nperms: 256, seed: 0x08bdd267bbf11bac,
               checksum: 0xc75ee0742652799f },
    MapEntry { children:  97, nperms: 256, seed: 0x17db97562227b4ab,
               checksum: 0x8035b1650396451b },
    MapEntry { children:  98, nperms: 256, seed: 0x368cea406e27a958,
               checksum: 0x7d3d38fc58eb667d },
    MapEntry { children:  99, nperms: 256, seed: 0xebc5df2181e12847,
               checksum: 0x7f288b127795e7cb },
    MapEntry { children: 100, nperms: 256, seed: 0x1a5988b861b9188f,
               checksum: 0xe2eda14c66b8284a },
    MapEntry { children: 101, nperms: 256, seed: 0x5ffe3272d529741d,
               checksum: 0xb90ec7a6346a0603 },
    MapEntry { children: 102, nperms: 256, seed: 0xc6f582eea59d9f9d,
               checksum: 0xb7b26fb2a569b121 },
    MapEntry { children: 103, nperms: 256, seed: 0xef71348c6009dd63,
               checksum: 0x8c6318949590fdcf },
    MapEntry { children: 104, nperms: 256, seed: 0x4600626a14c61749,
               checksum: 0x1bef99c8492ee3f4 },
    MapEntry { children: 105, nperms: 256, seed: 0xbe0edf4e7444e89b,
               checksum: 0x8dacfe7c05952eef },
    MapEntry { children: 106, nperms: 256, seed: 0x6d566711f9405c39,
               checksum: 0x743a3bf841d80b89 },
    MapEntry { children: 107, nperms: 256, seed: 0xb1573f0bc514f05d,
               checksum: 0x13124fd63435d80e },
    MapEntry { children: 108, nperms: 256, seed: 0xfdbbee4ee49e21ac,
               checksum: 0x846090daa65c68b3 },
    MapEntry { children: 109, nperms: 256, seed: 0xcaeeeeb6d9ce4622,
               checksum: 0x61455fcc2e1db9db },
    MapEntry { children: 110, nperms: 256, seed: 0x362a888ea4a9af4a,
               checksum: 0xb56758ac92d4d188 },
    MapEntry { children: 111, nperms: 256, seed: 0xd64494334a7ccbc2,
               checksum: 0x39b0f76a57413deb },
    MapEntry { children: 112, nperms: 256, seed: 0x543fd857f054befc,
               checksum: 0x10c6c7b191a16728 },
    MapEntry { children: 113, nperms: 256, seed: 0x267ef02b8ea5d654,
               checksum: 0x14f8cf03d5eff7ea },
    MapEntry { children: 114, nperms: 256, seed: 0xa7dfe105d6ce5568,
               checksum: 0xc3683e8ae003a344 },
    MapEntry { children: 115, nperms: 256, seed: 0x8646aa736866a824,
               checksum: 0xa867df3088178b25 },
    MapEntry { children: 116, nperms: 256, seed: 0xdaffdd68902f7e62,
               checksum: 0x0448df658d99f308 },
    MapEntry { children: 117, nperms: 256, seed: 0x7f65bed38096fa4b,
               checksum: 0x828ddfb5310a3dfe },
    MapEntry { children: 118, nperms: 256, seed: 0x4e1c906d81b58ead,
               checksum: 0x2b62532e203e24b7 },
    MapEntry { children: 119, nperms: 256, seed: 0x773e1bab5c136b76,
               checksum: 0x67f31ca3aac92ce7 },
    MapEntry { children: 120, nperms: 256, seed: 0x3e18e13b8070058a,
               checksum: 0x75e4861734d81066 },
    MapEntry { children: 121, nperms: 256, seed: 0x1a521079b79b2d8e,
               checksum: 0xf183caba31aed826 },
    MapEntry { children: 122, nperms: 256, seed: 0x0b15479e4d8139a1,
               checksum: 0xbe96840af27b0df3 },
    MapEntry { children: 123, nperms: 256, seed: 0x5b0b00748e1fc77c,
               checksum: 0x513d5628f37e0469 },
    MapEntry { children: 124, nperms: 256, seed: 0xc6ceda35019b34b3,
               checksum: 0xd9f44dddaa7d3fa8 },
    MapEntry { children: 125, nperms: 256, seed: 0xaec393f1dd2e3669,
               checksum: 0x04756e44f798c6e8 },
    MapEntry { children: 126, nperms: 256, seed: 0xd0d515e8a25c4530,
               checksum: 0xe97b0735743c53d3 },
    MapEntry { children: 127, nperms: 256, seed: 0x43bdd19fbe59db10,
               checksum: 0x06c39971ec8773a0 },
    MapEntry { children: 128, nperms: 256, seed: 0x551feebb3900f26e,
               checksum: 0xcea6aeaf8dd868fb },
    MapEntry { children: 129, nperms: 256, seed: 0x50432ed38b5eab36,
               checksum: 0xf06660030d5a24d1 },
    MapEntry { children: 130, nperms: 256, seed: 0x81b83491c39a5b10,
               checksum: 0xde6fd431a3ecab2b },
    MapEntry { children: 131, nperms: 256, seed: 0x55f8b1f7f6dc1ced,
               checksum: 0x4d44e3408538e5ad },
    MapEntry { children: 132, nperms: 256, seed: 0xadbca8b0a3cc3994,
               checksum: 0x0dce2b33977e9e8f },
    MapEntry { children: 133, nperms: 256, seed: 0x86867c7716e89e6d,
               checksum: 0x79224345de0924dc },
    MapEntry { children: 134, nperms: 256, seed: 0xe88d1e5a153b1d8b,
               checksum: 0x2e33f9d998d39a0c },
    MapEntry { children: 135, nperms: 256, seed: 0x8823f5c54fe5b653,
               checksum: 0xd4987af0717c5942 },
    MapEntry { children: 136, nperms: 256, seed: 0xa0a1aaeb9215cd70,
               checksum: 0x361449505192c69d },
    MapEntry { children: 137, nperms: 256, seed: 0xee8cb8a0d3b665b6,
               checksum: 0x66498e37c9f33f0e },
    MapEntry { children: 138, nperms: 256, seed: 0x3a79e10c7d50d9fe,
               checksum: 0x3f62694317c3caaa },
    MapEntry { children: 139, nperms: 256, seed: 0xc1fb332e2aa997af,
               checksum: 0xadb6ee807dbde81b },
    MapEntry { children: 140, nperms: 256, seed: 0x525140e89bef720d,
               checksum: 0x9c6f19228bd0c381 },
    MapEntry { children: 141, nperms: 256, seed: 0x43b192d4522d2afb,
               checksum: 0x68324a820a46d7fb },
    MapEntry { children: 142, nperms: 256, seed: 0x049cf8331f2ffe68,
               checksum: 0x72916b552fce0835 },
    MapEntry { children: 143, nperms: 256, seed: 0xed3e817a2c14f550,
               checksum: 0x5d208a6960d4e6f1 },
    MapEntry { children: 144, nperms: 256, seed: 0x7872812772772dfa,
               checksum: 0x69ca5333c5a44242 },
    MapEntry { children: 145, nperms: 256, seed: 0x955fbab64d80a55e,
               checksum: 0xa9a2d28248fe5f7a },
    MapEntry { children: 146, nperms: 256, seed: 0xe299f9adfe0fe563,
               checksum: 0xa3c837931af9d577 },
    MapEntry { children: 147, nperms: 256, seed: 0xcde9515ea4ed78e8,
               checksum: 0x064b26bc16c14e37 },
    MapEntry { children: 148, nperms: 256, seed: 0x236495a236ed913f,
               checksum: 0xa0e4295cff3e94e8 },
    MapEntry { children: 149, nperms: 256, seed: 0x03e81a077bf76877,
               checksum: 0x97b95d2fbe747e5f },
    MapEntry { children: 150, nperms: 256, seed: 0xf486351c127cdc99,
               checksum: 0x6fa66774928a24bf },
    MapEntry { children: 151, nperms: 256, seed: 0x06753b2489c8ea2b,
               checksum: 0x6b143e695cf13c3d },
    MapEntry { children: 152, nperms: 256, seed: 0x5d9b244a6ab75968,
               checksum: 0xd45e2f24554b92c1 },
    MapEntry { children: 153, nperms: 256, seed: 0x0ced7149644fccea,
               checksum: 0x7adc6351d26b212f },
    MapEntry { children: 154, nperms: 256, seed: 0xd6d3f94b2807d043,
               checksum: 0x77224d0835695242 },
    MapEntry { children: 155, nperms: 256, seed: 0x54351ffdd5275392,
               checksum: 0xc0059b9d2fe403e0 },
    MapEntry { children: 156, nperms: 256, seed: 0xa593634f6042f36c,
               checksum: 0x0a03282a21433903 },
    MapEntry { children: 157, nperms: 256, seed: 0xa631272da507f1b4,
               checksum: 0x2b1a48af71a17152 },
    MapEntry { children: 158, nperms: 256, seed: 0x1c4d405782b54dfc,
               checksum: 0xb7084cee41a17dfc },
    MapEntry { children: 159, nperms: 256, seed: 0x650008c7b370e7e7,
               checksum: 0x48e42194a92df0f4 },
    MapEntry { children: 160, nperms: 256, seed: 0x29b1808af9b218e6,
               checksum: 0x2010e711849aa45f },
    MapEntry { children: 161, nperms: 256, seed: 0xce92990d661399e3,
               checksum: 0xbc2324d2fda12ec4 },
    MapEntry { children: 162, nperms: 256, seed: 0xf32ff3bd07f9f97a,
               checksum: 0xe53bedad1214972f },
    MapEntry { children: 163, nperms: 256, seed: 0x99cc46061e21dbe2,
               checksum: 0xa08698005e31dd91 },
    MapEntry { children: 164, nperms: 256, seed: 0xca5bf51f7d4a18e7,
               checksum: 0x942ce9b622bc9edc },
    MapEntry { children: 165, nperms: 256, seed: 0x284fe61befacda87,
               checksum: 0xae3e4ef8903ee4b6 },
    MapEntry { children: 166, nperms: 256, seed: 0x86727e3f441cd1ff,
               checksum: 0x9120e815b5e3f07f },
    MapEntry { children: 167, nperms: 256, seed: 0x373d97a9160c75a5,
               checksum: 0x961a287150d39658 },
    MapEntry { children: 168, nperms: 256, seed: 0x893308e5a1d5b919,
               checksum: 0x5d89de8b72a5eede },
    MapEntry { children: 169, nperms: 256, seed: 0x3c771f589e08896f,
               checksum: 0x8b9374aac10fa591 },
    MapEntry { children: 170, nperms: 256, seed: 0xecc04b1f620fe65e,
               checksum: 0xeb273d316fdfc6ea },
    MapEntry { children: 171, nperms: 256, seed: 0x6aa8f0c869ea5687,
               checksum: 0xd8ee9111777bcbc5 },
    MapEntry { children: 172, nperms: 256, seed: 0xec32e7027175678c,
               checksum: 0x5ee26ca9611090b3 },
    MapEntry { children: 173, nperms: 256, seed: 0xa709ffda130fbd12,
               checksum: 0x9cf4924ff75931a1 },
    MapEntry { children: 174, nperms: 256, seed: 0x2260f4c03164ffe9,
               checksum: 0xae498c81b3c7619a },
    MapEntry { children: 175, nperms: 256, seed: 0xfe8ffbe18eb51e31,
               checksum: 0x2768416a1f2d9bb9 },
    MapEntry { children: 176, nperms: 256, seed: 0x82dbe88375010601,
               checksum: 0xeb143db84f48b3f6 },
    MapEntry { children: 177, nperms: 256, seed: 0x5ad653b41845eec3,
               checksum: 0x9c9e013541fafd57 },
    MapEntry { children: 178, nperms: 256, seed: 0x33944acc2d17ccc2,
               checksum: 0x7b4c855bb0968e84 },
    MapEntry { children: 179, nperms: 256, seed: 0x7cca3c8fbe5a6b3d,
               checksum: 0xb63b388b0923a1f1 },
    MapEntry { children: 180, nperms: 256, seed: 0xcbac484b72ae4e30,
               checksum: 0x9a463ee34287caae },
    MapEntry { children: 181, nperms: 256, seed: 0xd099ab6c2bec83ff,
               checksum: 0x239f681263bd83dc },
    MapEntry { children: 182, nperms: 256, seed: 0x701fede2d03ac361,
               checksum: 0x53c5d6ce7a4d5f78 },
    MapEntry { children: 183, nperms: 256, seed: 0xccdc22c4ceddf8ac,
               checksum: 0x46e41d93794eb1b7 },
    MapEntry { children: 184, nperms: 256, seed: 0x225ba349cc1fac8f,
               checksum: 0xca417aed9858987c },
    MapEntry { children: 185, nperms: 256, seed: 0x6321bd9c26727eda,
               checksum: 0x5b6444633d34f619 },
    MapEntry { children: 186, nperms: 256, seed: 0x1b1233ebb70656f7,
               checksum: 0x2b6a0e349a97fcf4 },
    MapEntry { children: 187, nperms: 256, seed: 0xdaff7ab69fd60d26,
               checksum: 0x141abf9779b5261d },
    MapEntry { children: 188, nperms: 256, seed: 0xbd2b352c5815d970,
               checksum: 0xbb7a497ca818170c },
    MapEntry { children: 189, nperms: 256, seed: 0x21f5057c86b731de,
               checksum: 0x871cc974f642b39e },
    MapEntry { children: 190, nperms: 256, seed: 0xb3ab2e420b4212b9,
               checksum: 0x0f20e16eee4b914c },
    MapEntry { children: 191, nperms: 256, seed: 0x97ac447ef7794878,
               checksum: 0xcce92f8019cd625c },
    MapEntry { children: 192, nperms: 256, seed: 0x0f6e906c8e41cc2e,
               checksum: 0x2a58c5117c8d2c99 },
    MapEntry { children: 193, nperms: 256, seed: 0x0c49daf9dcbb0cf5,
               checksum: 0x865bfbe75e17f849 },
    MapEntry { children: 194, nperms: 256, seed: 0x19b839d4319da091,
               checksum: 0x5d754e0abc5a0128 },
    MapEntry { children: 195, nperms: 256, seed: 0x05afd5e906411624,
               checksum: 0x1a043576fa092cb0 },
    MapEntry { children: 196, nperms: 256, seed: 0xf55b3cd973054b75,
               checksum: 0x580de9cc0efb42ce },
    MapEntry { children: 197, nperms: 256, seed: 0x845180aa5e26d517,
               checksum: 0xcaf907c61650da29 },
    MapEntry { children: 198, nperms: 256, seed: 0x2e6fc3f324002479,
               checksum: 0x5b963bca97a43bba },
    MapEntry { children: 199, nperms: 256, seed: 0x1159af8bfe93db68,
               checksum: 0x583180a19a81faaa },
    MapEntry { children: 200, nperms: 256, seed: 0x050831268c7c1968,
               checksum: 0x5e2b2451707ddc58 },
    MapEntry { children: 201, nperms: 256, seed: 0x753a4f0ea2ee1840,
               checksum: 0x841b12577fe06aca },
    MapEntry { children: 202, nperms: 256, seed: 0x6669516bf648be3b,
               checksum: 0x64f37bbd5e98ded2 },
    MapEntry { children: 203, nperms: 256, seed: 0xc6bf271c2f47088e,
               checksum: 0xbd4a9be83bcff875 },
    MapEntry { children: 204, nperms: 256, seed: 0x746ba61055a6f99f,
               checksum: 0xacfe864760c7c936 },
    MapEntry { children: 205, nperms: 256, seed: 0xc7589bd845b97b74,
               checksum: 0x4fafcc212be168aa },
    MapEntry { children: 206, nperms: 256, seed: 0x862f1b2c9c4fc662,
               checksum: 0x693a80697bc74edf },
    MapEntry { children: 207, nperms: 256, seed: 0xbf92c6f614182e45,
               checksum: 0x1f46f32438566ac5 },
    MapEntry { children: 208, nperms: 256, seed: 0x70409042cb3f9c81,
               checksum: 0x1dac6818970a9cf8 },
    MapEntry { children: 209, nperms: 256, seed: 0xacff3c6529e2f7d5,
               checksum: 0x26c2a2f8ab6f513c },
    MapEntry { children: 210, nperms: 256, seed: 0x21ca217445b534f0,
               checksum: 0x82a17b640a0a752c },
    MapEntry { children: 211, nperms: 256, seed: 0xd46ee604ff4fe3a0,
               checksum: 0x1324ebc004d79fad },
    MapEntry { children: 212, nperms: 256, seed: 0x7cb160eae0dd16a3,
               checksum: 0xf86d538e0a9c64c1 },
    MapEntry { children: 213, nperms: 256, seed: 0x94ab40d02eaa4e8b,
               checksum: 0x72d2183a9080513b },
    MapEntry { children: 214, nperms: 256, seed: 0xe0d1d7edcabdf2d7,
               checksum: 0x2a7c6d4ac0de9d8d },
    MapEntry { children: 215, nperms: 256, seed: 0xdf0f20ee41efeeba,
               checksum: 0x041f4d67bc05edfe },
    MapEntry { children: 216, nperms: 256, seed: 0xc82a8c23e2fdc86d,
               checksum: 0xaf7b99f2f350a8fc },
    MapEntry { children: 217, nperms: 256, seed: 0xa60cda161c71fd40,
               checksum: 0x0273e7fea5b42183 },
    MapEntry { children: 218, nperms: 256, seed: 0xf7e726018649962b,
               checksum: 0x9838c1ca74ab1ca2 },
    MapEntry { children: 219, nperms: 256, seed: 0x807396f501abde11,
               checksum: 0x84bf6ba551a463ae },
    MapEntry { children: 220, nperms: 256, seed: 0xc0e58687bd79b00f,
               checksum: 0x6ac6f5f4b28fec16 },
    MapEntry { children: 221, nperms: 256, seed: 0xd8de4f970b674554,
               checksum: 0x6ec0418737787018 },
    MapEntry { children: 222, nperms: 256, seed: 0x051c82cf1c0de93d,
               checksum: 0x66f4985e5148c83e },
    MapEntry { children: 223, nperms: 256, seed: 0xf400f25bdab654d2,
               checksum: 0xbf3916a5eaee0182 },
    MapEntry { children: 224, nperms: 256, seed: 0xab40fcf67f43e59f,
               checksum: 0x4fb88328ad68b011 },
    MapEntry { children: 225, nperms: 256, seed: 0x68d784c03c04c6ec,
               checksum: 0xf04e82f5cd10b42f },
    MapEntry { children: 226, nperms: 256, seed: 0x8e90374414426f6b,
               checksum: 0x75afd472ad9333c1 },
    MapEntry { children: 227, nperms: 256, seed: 0x05ba558deb6c957a,
               checksum: 0xd1b8f25c85fb6344 },
    MapEntry { children: 228, nperms: 256, seed: 0xeaf3d12dac54bc7b,
               checksum: 0x388338769e1e8ef4 },
    MapEntry { children: 229, nperms: 256, seed: 0xa25e2e31915e0dd6,
               checksum: 0xc56abeb36e9f6422 },
    MapEntry { children: 230, nperms: 256, seed: 0x47ef316a520c0a8a,
               checksum: 0x251b6185494d5835 },
    MapEntry { children: 231, nperms: 256, seed: 0xc029cf06cdbc2b5c,
               checksum: 0xcbd38cfa196bcb35 },
    MapEntry { children: 232, nperms: 256, seed: 0xd9641bff05dc4c1e,
               checksum: 0x82723306bf5f6372 },
    MapEntry { children: 233, nperms: 256, seed: 0x4fc192c055fda4ed,
               checksum: 0x5fff17903f0de8e3 },
    MapEntry { children: 234, nperms: 256, seed: 0x01661692890def77,
               checksum: 0x18ea81c9130bd47a },
    MapEntry { children: 235, nperms: 256, seed: 0xc3754b0fe602b3a0,
               checksum: 0x21cb5b2822f6748b },
    MapEntry { children: 236, nperms: 256, seed: 0x5c97011190af39e1,
               checksum: 0xa0556202d90d2d7e },
    MapEntry { children: 237, nperms: 256, seed: 0x1034427163d8a7bc,
               checksum: 0x611179e4e64e1f2b },
    MapEntry { children: 238, nperms: 256, seed: 0x197b86898c9014ef,
               checksum: 0x496045b5646b0d23 },
    MapEntry { children: 239, nperms: 256, seed: 0x93eadd41b5e12890,
               checksum: 0xe459c7d08fdff108 },
    MapEntry { children: 240, nperms: 256, seed: 0x58521b07fe5c7f1c,
               checksum: 0xdb82a9b972f339bc },
    MapEntry { children: 241, nperms: 256, seed: 0x068f1cea6f3165e3,
               checksum: 0x51a9d24b277178a8 },
    MapEntry { children: 242, nperms: 256, seed: 0xe7848bd7f93f06a7,
               checksum: 0x0b1fe6299469c604 },
    MapEntry { children: 243, nperms: 256, seed: 0x3d1109a3c3397f15,
               checksum: 0xe040cab3e1588f34 },
    MapEntry { children: 244, nperms: 256, seed: 0xb154469e049e855b,
               checksum: 0x75c8d8753be0aa07 },
    MapEntry { children: 245, nperms: 256, seed: 0x895abe49c2cc9783,
               checksum: 0x38e0dbf096659baa },
    MapEntry { children: 246, nperms: 256, seed: 0x599e4fce55e7bea3,
               checksum: 0x8517e34d204c92ae },
    MapEntry { children: 247, nperms: 256, seed: 0x521b9116a92a7fa7,
               checksum: 0xbf7bf65efeb7d297 },
    MapEntry { children: 248, nperms: 256, seed: 0x4fdbeb3d9ef5fa4e,
               checksum: 0xc66257956b65600d },
    MapEntry { children: 249, nperms: 256, seed: 0x8d1c3e412d9eac01,
               checksum: 0xed9adbf579f45c48 },
    MapEntry { children: 250, nperms: 256, seed: 0x448fdd20bf004ec5,
               checksum: 0x1563d97987163b47 },
    MapEntry { children: 251, nperms: 256, seed: 0xc62cbdb95ce01c17,
               checksum: 0xb9f203f26122e803 },
    MapEntry { children: 252, nperms: 256, seed: 0xd692d9a45cadc99c,
               checksum: 0x90e69f0d621267f2 },
    MapEntry { children: 253, nperms: 256, seed: 0x097d4a4a1bdb32e7,
               checksum: 0x89f1392941ad0ee1 },
    MapEntry { children: 254, nperms: 256, seed: 0x7582dfc7d88d6b69,
               checksum: 0x824759bd77e055c7 },
    MapEntry { children: 255, nperms: 256, seed: 0x92562180734aa776,
               checksum: 0x930a5810d5804b1f },
];
