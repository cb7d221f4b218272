//! Groups from [RFC 5054](https://tools.ietf.org/html/rfc5054)
//!
//! It is strongly recommended to use them instead of custom generated
//! groups. Additionally, it is not recommended to use `G_1024` and `G_1536`,
//! they are provided only for compatibility with the legacy software.

use std::sync::LazyLock;

use num_bigint::BigUint;

use crate::errors::SrpAuthError;
use crate::types::SrpGroup;

const N_1024: &str = concat!(
    "EEAF0AB9ADB38DD69C33F80AFA8FC5E860726187",
    "75FF3C0B9EA2314C9C256576D674DF7496EA81D3",
    "383B4813D692C6E0E0D5D8E250B98BE48E495C1D",
    "6089DAD15DC7D7B46154D6B6CE8EF4AD69B15D49",
    "82559B297BCF1885C529F566660E57EC68EDBC3C",
    "05726CC02FD4CBF4976EAA9AFD5138FE8376435B",
    "9FC61D2FC0EB06E3",
);

const N_1536: &str = concat!(
    "9DEF3CAFB939277AB1F12A8617A47BBBDBA51DF499AC4C80BEEEA961",
    "4B19CC4D5F4F5F556E27CBDE51C6A94BE4607A291558903BA0D0F843",
    "80B655BB9A22E8DCDF028A7CEC67F0D08134B1C8B97989149B609E0B",
    "E3BAB63D47548381DBC5B1FC764E3F4B53DD9DA1158BFD3E2B9C8CF5",
    "6EDF019539349627DB2FD53D24B7C48665772E437D6C7F8CE442734A",
    "F7CCB7AE837C264AE3A9BEB87F8A2FE9B8B5292E5A021FFF5E91479E",
    "8CE7A28C2442C6F315180F93499A234DCF76E3FED135F9BB",
);

const N_2048: &str = concat!(
    "AC6BDB41324A9A9BF166DE5E1389582FAF72B6651987EE07FC319294",
    "3DB56050A37329CBB4A099ED8193E0757767A13DD52312AB4B03310D",
    "CD7F48A9DA04FD50E8083969EDB767B0CF6095179A163AB3661A05FB",
    "D5FAAAE82918A9962F0B93B855F97993EC975EEAA80D740ADBF4FF74",
    "7359D041D5C33EA71D281E446B14773BCA97B43A23FB801676BD207A",
    "436C6481F1D2B9078717461A5B9D32E688F87748544523B524B0D57D",
    "5EA77A2775D2ECFA032CFBDBF52FB3786160279004E57AE6AF874E73",
    "03CE53299CCC041C7BC308D82A5698F3A8D0C38271AE35F8E9DBFBB6",
    "94B5C803D89F7AE435DE236D525F54759B65E372FCD68EF20FA7111F",
    "9E4AFF73",
);

const N_3072: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E08",
    "8A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B",
    "302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9",
    "A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE6",
    "49286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8",
    "FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C",
    "180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718",
    "3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D",
    "04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7D",
    "B3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3D226",
    "1AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB3143DB5BFC",
    "E0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF",
);

const N_4096: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E08",
    "8A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B",
    "302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9",
    "A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE6",
    "49286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8",
    "FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C",
    "180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718",
    "3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D",
    "04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7D",
    "B3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3D226",
    "1AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB3143DB5BFC",
    "E0FD108E4B82D120A92108011A723C12A787E6D788719A10BDBA5B26",
    "99C327186AF4E23C1A946834B6150BDA2583E9CA2AD44CE8DBBBC2DB",
    "04DE8EF92E8EFC141FBECAA6287C59474E6BC05D99B2964FA090C3A2",
    "233BA186515BE7ED1F612970CEE2D7AFB81BDD762170481CD0069127",
    "D5B05AA993B4EA988D8FDDC186FFB7DC90A6C08F4DF435C934063199",
    "FFFFFFFFFFFFFFFF",
);

fn group(n_hex: &str, g: u32) -> SrpGroup {
    SrpGroup {
        n: BigUint::parse_bytes(n_hex.as_bytes(), 16).expect("catalog modulus should be valid hex"),
        g: BigUint::from(g),
    }
}

/// 1024-bit group.
pub static G_1024: LazyLock<SrpGroup> = LazyLock::new(|| group(N_1024, 2));
/// 1536-bit group.
pub static G_1536: LazyLock<SrpGroup> = LazyLock::new(|| group(N_1536, 2));
/// 2048-bit group.
pub static G_2048: LazyLock<SrpGroup> = LazyLock::new(|| group(N_2048, 2));
/// 3072-bit group.
pub static G_3072: LazyLock<SrpGroup> = LazyLock::new(|| group(N_3072, 5));
/// 4096-bit group.
pub static G_4096: LazyLock<SrpGroup> = LazyLock::new(|| group(N_4096, 5));

/// Look up a catalog group by its bit size.
///
/// Groups are never built from attacker-reachable input; the catalog is the
/// only construction path this crate exposes.
pub fn lookup(name: &str) -> Result<&'static SrpGroup, SrpAuthError> {
    match name {
        "1024" => Ok(&G_1024),
        "1536" => Ok(&G_1536),
        "2048" => Ok(&G_2048),
        "3072" => Ok(&G_3072),
        "4096" => Ok(&G_4096),
        _ => Err(SrpAuthError::UnknownGroup {
            name: name.to_owned(),
        }),
    }
}
