// SPDX-License-Identifier: Apache-2.0

//! Properties that must hold for every valid table shape.

use regex::Regex;
use test_case::test_case;

use recip_lut::hex_file::{emit_hex, parse_hex};
use recip_lut::rom_module::NSIG_PARAM;
use recip_lut::{LutConfig, LutShape, ReciprocalLut, RomLookupModule, VerilogVersion};

fn config_for(input_bits: u32, lut_bits: u32) -> LutConfig {
    LutConfig {
        shape: LutShape::new(input_bits, lut_bits),
        ..LutConfig::default()
    }
}

#[test_case(1, 1; "input_bits=1, lut_bits=1")]
#[test_case(4, 3; "input_bits=4, lut_bits=3")]
#[test_case(8, 8; "input_bits=8, lut_bits=8")]
#[test_case(10, 7; "input_bits=10, lut_bits=7")]
#[test_case(10, 8; "input_bits=10, lut_bits=8")]
#[test_case(12, 5; "input_bits=12, lut_bits=5")]
fn test_table_length_and_range(input_bits: u32, lut_bits: u32) {
    let shape = LutShape::new(input_bits, lut_bits);
    shape.validate().unwrap();
    let lut = ReciprocalLut::generate(&shape);
    assert_eq!(lut.len(), 1usize << input_bits);
    assert!(lut.entries().iter().all(|&v| v < (1u32 << lut_bits)));
    assert_eq!(lut.get(0), Some(0));
}

#[test_case(2, 2; "input_bits=2, lut_bits=2")]
#[test_case(6, 4; "input_bits=6, lut_bits=4")]
#[test_case(10, 7; "input_bits=10, lut_bits=7")]
#[test_case(11, 8; "input_bits=11, lut_bits=8")]
fn test_hex_round_trip(input_bits: u32, lut_bits: u32) {
    let lut = ReciprocalLut::generate(&LutShape::new(input_bits, lut_bits));
    let text = emit_hex(&lut);
    assert_eq!(text.lines().count(), lut.len());
    assert_eq!(parse_hex(&text).unwrap().as_slice(), lut.entries());
}

#[test_case(3, 2, VerilogVersion::Verilog; "input_bits=3, lut_bits=2, verilog")]
#[test_case(10, 7, VerilogVersion::Verilog; "input_bits=10, lut_bits=7, verilog")]
#[test_case(10, 7, VerilogVersion::SystemVerilog; "input_bits=10, lut_bits=7, sv")]
#[test_case(9, 8, VerilogVersion::SystemVerilog; "input_bits=9, lut_bits=8, sv")]
fn test_module_structure(input_bits: u32, lut_bits: u32, version: VerilogVersion) {
    let config = LutConfig {
        verilog_version: version,
        ..config_for(input_bits, lut_bits)
    };
    config.validate().unwrap();
    let lut = ReciprocalLut::generate(&config.shape);
    let module = RomLookupModule::new(&config, &lut);
    assert_eq!(module.rom_max_index(), lut.len() - 1);
    let text = module.render();

    assert_eq!(text.matches(&format!("\"{}\"", config.hex_file)).count(), 1);
    assert_eq!(text.matches("module ").count(), 1);
    assert_eq!(text.matches("endmodule").count(), 1);

    let rom_decl = Regex::new(r"(reg|logic) \[(\d+):0\] rom \[0:(\d+)\];").unwrap();
    let caps = rom_decl.captures(&text).expect("ROM declaration");
    assert_eq!(caps[2].parse::<u32>().unwrap(), lut_bits - 1);
    assert_eq!(caps[3].parse::<usize>().unwrap(), lut.len() - 1);

    let input_decl = Regex::new(r"input (wire|logic) \[(\d+):0\] mant,").unwrap();
    let caps = input_decl.captures(&text).expect("input port");
    assert_eq!(caps[2].parse::<u32>().unwrap(), input_bits - 1);

    assert!(text.contains(&format!("[{}+1:0] x0", NSIG_PARAM)));
    assert!(text.contains("parameter NEXP = 5,"));
    assert!(text.contains("parameter NSIG = 11\n"));
}

#[test_case(8; "nsig=8")]
#[test_case(11; "nsig=11")]
#[test_case(23; "nsig=23")]
#[test_case(52; "nsig=52")]
fn test_output_concatenations_fill_port(nsig: u32) {
    let config = LutConfig {
        nsig,
        ..LutConfig::default()
    };
    config.validate().unwrap();
    let lut = ReciprocalLut::generate(&config.shape);
    let module = RomLookupModule::new(&config, &lut);
    assert_eq!(module.default_output_width(), Some(nsig + 2));
    for case in [module.unity_case, module.normal_case] {
        assert_eq!(case.width(module.rom_bits, nsig), nsig + 2);
    }
    // The zero-input arm spends one bit fewer on the leading pattern.
    assert_eq!(
        module.unity_case.fill_bits(nsig),
        module.normal_case.fill_bits(nsig) + 1
    );
}

#[test]
fn test_single_bit_ports_have_no_span() {
    let config = config_for(1, 1);
    let lut = ReciprocalLut::generate(&config.shape);
    let text = RomLookupModule::new(&config, &lut).render();
    assert!(text.contains("input wire mant,"), "{}", text);
    assert!(text.contains("reg rom [0:1];"), "{}", text);
    assert!(text.contains("wire seed;"), "{}", text);
    assert!(text.contains("{1'b1, seed, {(NSIG){1'b0}}}"), "{}", text);
    assert!(text.contains("{2'b01, seed, {(NSIG-1){1'b0}}}"), "{}", text);
}
