use bitflags::bitflags;

/// Instruction encoding formats from the DEX instruction-format list.
///
/// The format names follow the Dalvik documentation: the first digit is the
/// size in 16-bit code units, the second the number of registers, and the
/// trailing letter the kind of extra payload (none, immediate, branch
/// target, pool index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Format10x,
    Format12x,
    Format11n,
    Format11x,
    Format10t,
    Format20t,
    Format22x,
    Format21t,
    Format21s,
    Format21h,
    Format21c,
    Format23x,
    Format22b,
    Format22t,
    Format22s,
    Format22c,
    Format32x,
    Format30t,
    Format31t,
    Format31i,
    Format31c,
    Format35c,
    Format3rc,
    Format51l,
}

impl Format {
    /// Encoded size in 16-bit code units.
    pub const fn code_units(self) -> usize {
        match self {
            Format::Format10x
            | Format::Format12x
            | Format::Format11n
            | Format::Format11x
            | Format::Format10t => 1,

            Format::Format20t
            | Format::Format22x
            | Format::Format21t
            | Format::Format21s
            | Format::Format21h
            | Format::Format21c
            | Format::Format23x
            | Format::Format22b
            | Format::Format22t
            | Format::Format22s
            | Format::Format22c => 2,

            Format::Format32x
            | Format::Format30t
            | Format::Format31t
            | Format::Format31i
            | Format::Format31c
            | Format::Format35c
            | Format::Format3rc => 3,

            Format::Format51l => 5,
        }
    }
}

bitflags! {
    /// Control-flow properties of an opcode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpcodeFlags: u8 {
        /// Transfers control to another instruction.
        const JUMP = 1 << 0;
        /// Has a fall-through path in addition to its targets.
        const CONDITIONAL = 1 << 1;
        /// Leaves the method normally.
        const RETURN = 1 << 2;
        /// Leaves the method by raising.
        const THROW = 1 << 3;
    }
}

macro_rules! opcodes {
    ($( $value:literal => $name:ident, $mnemonic:literal, $format:ident; )*) => {
        /// The standard Dalvik opcode map (0x00-0xe2).
        ///
        /// Closed enumeration; values outside the map (unused slots and
        /// odex-only extensions) have no variant and fail [`Opcode::from_u8`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Opcode {
            $( $name = $value, )*
        }

        impl Opcode {
            /// Look up the opcode for a raw byte value.
            pub const fn from_u8(value: u8) -> Option<Opcode> {
                match value {
                    $( $value => Some(Opcode::$name), )*
                    _ => None,
                }
            }

            /// Mnemonic as printed by dexdump/smali.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                }
            }

            /// Encoding format of this opcode.
            pub const fn format(self) -> Format {
                match self {
                    $( Opcode::$name => Format::$format, )*
                }
            }
        }
    };
}

opcodes! {
    0x00 => Nop, "nop", Format10x;
    0x01 => Move, "move", Format12x;
    0x02 => MoveFrom16, "move/from16", Format22x;
    0x03 => Move16, "move/16", Format32x;
    0x04 => MoveWide, "move-wide", Format12x;
    0x05 => MoveWideFrom16, "move-wide/from16", Format22x;
    0x06 => MoveWide16, "move-wide/16", Format32x;
    0x07 => MoveObject, "move-object", Format12x;
    0x08 => MoveObjectFrom16, "move-object/from16", Format22x;
    0x09 => MoveObject16, "move-object/16", Format32x;
    0x0a => MoveResult, "move-result", Format11x;
    0x0b => MoveResultWide, "move-result-wide", Format11x;
    0x0c => MoveResultObject, "move-result-object", Format11x;
    0x0d => MoveException, "move-exception", Format11x;
    0x0e => ReturnVoid, "return-void", Format10x;
    0x0f => Return, "return", Format11x;
    0x10 => ReturnWide, "return-wide", Format11x;
    0x11 => ReturnObject, "return-object", Format11x;
    0x12 => Const4, "const/4", Format11n;
    0x13 => Const16, "const/16", Format21s;
    0x14 => Const, "const", Format31i;
    0x15 => ConstHigh16, "const/high16", Format21h;
    0x16 => ConstWide16, "const-wide/16", Format21s;
    0x17 => ConstWide32, "const-wide/32", Format31i;
    0x18 => ConstWide, "const-wide", Format51l;
    0x19 => ConstWideHigh16, "const-wide/high16", Format21h;
    0x1a => ConstString, "const-string", Format21c;
    0x1b => ConstStringJumbo, "const-string/jumbo", Format31c;
    0x1c => ConstClass, "const-class", Format21c;
    0x1d => MonitorEnter, "monitor-enter", Format11x;
    0x1e => MonitorExit, "monitor-exit", Format11x;
    0x1f => CheckCast, "check-cast", Format21c;
    0x20 => InstanceOf, "instance-of", Format22c;
    0x21 => ArrayLength, "array-length", Format12x;
    0x22 => NewInstance, "new-instance", Format21c;
    0x23 => NewArray, "new-array", Format22c;
    0x24 => FilledNewArray, "filled-new-array", Format35c;
    0x25 => FilledNewArrayRange, "filled-new-array/range", Format3rc;
    0x26 => FillArrayData, "fill-array-data", Format31t;
    0x27 => Throw, "throw", Format11x;
    0x28 => Goto, "goto", Format10t;
    0x29 => Goto16, "goto/16", Format20t;
    0x2a => Goto32, "goto/32", Format30t;
    0x2b => PackedSwitch, "packed-switch", Format31t;
    0x2c => SparseSwitch, "sparse-switch", Format31t;
    0x2d => CmplFloat, "cmpl-float", Format23x;
    0x2e => CmpgFloat, "cmpg-float", Format23x;
    0x2f => CmplDouble, "cmpl-double", Format23x;
    0x30 => CmpgDouble, "cmpg-double", Format23x;
    0x31 => CmpLong, "cmp-long", Format23x;
    0x32 => IfEq, "if-eq", Format22t;
    0x33 => IfNe, "if-ne", Format22t;
    0x34 => IfLt, "if-lt", Format22t;
    0x35 => IfGe, "if-ge", Format22t;
    0x36 => IfGt, "if-gt", Format22t;
    0x37 => IfLe, "if-le", Format22t;
    0x38 => IfEqz, "if-eqz", Format21t;
    0x39 => IfNez, "if-nez", Format21t;
    0x3a => IfLtz, "if-ltz", Format21t;
    0x3b => IfGez, "if-gez", Format21t;
    0x3c => IfGtz, "if-gtz", Format21t;
    0x3d => IfLez, "if-lez", Format21t;
    0x44 => Aget, "aget", Format23x;
    0x45 => AgetWide, "aget-wide", Format23x;
    0x46 => AgetObject, "aget-object", Format23x;
    0x47 => AgetBoolean, "aget-boolean", Format23x;
    0x48 => AgetByte, "aget-byte", Format23x;
    0x49 => AgetChar, "aget-char", Format23x;
    0x4a => AgetShort, "aget-short", Format23x;
    0x4b => Aput, "aput", Format23x;
    0x4c => AputWide, "aput-wide", Format23x;
    0x4d => AputObject, "aput-object", Format23x;
    0x4e => AputBoolean, "aput-boolean", Format23x;
    0x4f => AputByte, "aput-byte", Format23x;
    0x50 => AputChar, "aput-char", Format23x;
    0x51 => AputShort, "aput-short", Format23x;
    0x52 => Iget, "iget", Format22c;
    0x53 => IgetWide, "iget-wide", Format22c;
    0x54 => IgetObject, "iget-object", Format22c;
    0x55 => IgetBoolean, "iget-boolean", Format22c;
    0x56 => IgetByte, "iget-byte", Format22c;
    0x57 => IgetChar, "iget-char", Format22c;
    0x58 => IgetShort, "iget-short", Format22c;
    0x59 => Iput, "iput", Format22c;
    0x5a => IputWide, "iput-wide", Format22c;
    0x5b => IputObject, "iput-object", Format22c;
    0x5c => IputBoolean, "iput-boolean", Format22c;
    0x5d => IputByte, "iput-byte", Format22c;
    0x5e => IputChar, "iput-char", Format22c;
    0x5f => IputShort, "iput-short", Format22c;
    0x60 => Sget, "sget", Format21c;
    0x61 => SgetWide, "sget-wide", Format21c;
    0x62 => SgetObject, "sget-object", Format21c;
    0x63 => SgetBoolean, "sget-boolean", Format21c;
    0x64 => SgetByte, "sget-byte", Format21c;
    0x65 => SgetChar, "sget-char", Format21c;
    0x66 => SgetShort, "sget-short", Format21c;
    0x67 => Sput, "sput", Format21c;
    0x68 => SputWide, "sput-wide", Format21c;
    0x69 => SputObject, "sput-object", Format21c;
    0x6a => SputBoolean, "sput-boolean", Format21c;
    0x6b => SputByte, "sput-byte", Format21c;
    0x6c => SputChar, "sput-char", Format21c;
    0x6d => SputShort, "sput-short", Format21c;
    0x6e => InvokeVirtual, "invoke-virtual", Format35c;
    0x6f => InvokeSuper, "invoke-super", Format35c;
    0x70 => InvokeDirect, "invoke-direct", Format35c;
    0x71 => InvokeStatic, "invoke-static", Format35c;
    0x72 => InvokeInterface, "invoke-interface", Format35c;
    0x74 => InvokeVirtualRange, "invoke-virtual/range", Format3rc;
    0x75 => InvokeSuperRange, "invoke-super/range", Format3rc;
    0x76 => InvokeDirectRange, "invoke-direct/range", Format3rc;
    0x77 => InvokeStaticRange, "invoke-static/range", Format3rc;
    0x78 => InvokeInterfaceRange, "invoke-interface/range", Format3rc;
    0x7b => NegInt, "neg-int", Format12x;
    0x7c => NotInt, "not-int", Format12x;
    0x7d => NegLong, "neg-long", Format12x;
    0x7e => NotLong, "not-long", Format12x;
    0x7f => NegFloat, "neg-float", Format12x;
    0x80 => NegDouble, "neg-double", Format12x;
    0x81 => IntToLong, "int-to-long", Format12x;
    0x82 => IntToFloat, "int-to-float", Format12x;
    0x83 => IntToDouble, "int-to-double", Format12x;
    0x84 => LongToInt, "long-to-int", Format12x;
    0x85 => LongToFloat, "long-to-float", Format12x;
    0x86 => LongToDouble, "long-to-double", Format12x;
    0x87 => FloatToInt, "float-to-int", Format12x;
    0x88 => FloatToLong, "float-to-long", Format12x;
    0x89 => FloatToDouble, "float-to-double", Format12x;
    0x8a => DoubleToInt, "double-to-int", Format12x;
    0x8b => DoubleToLong, "double-to-long", Format12x;
    0x8c => DoubleToFloat, "double-to-float", Format12x;
    0x8d => IntToByte, "int-to-byte", Format12x;
    0x8e => IntToChar, "int-to-char", Format12x;
    0x8f => IntToShort, "int-to-short", Format12x;
    0x90 => AddInt, "add-int", Format23x;
    0x91 => SubInt, "sub-int", Format23x;
    0x92 => MulInt, "mul-int", Format23x;
    0x93 => DivInt, "div-int", Format23x;
    0x94 => RemInt, "rem-int", Format23x;
    0x95 => AndInt, "and-int", Format23x;
    0x96 => OrInt, "or-int", Format23x;
    0x97 => XorInt, "xor-int", Format23x;
    0x98 => ShlInt, "shl-int", Format23x;
    0x99 => ShrInt, "shr-int", Format23x;
    0x9a => UshrInt, "ushr-int", Format23x;
    0x9b => AddLong, "add-long", Format23x;
    0x9c => SubLong, "sub-long", Format23x;
    0x9d => MulLong, "mul-long", Format23x;
    0x9e => DivLong, "div-long", Format23x;
    0x9f => RemLong, "rem-long", Format23x;
    0xa0 => AndLong, "and-long", Format23x;
    0xa1 => OrLong, "or-long", Format23x;
    0xa2 => XorLong, "xor-long", Format23x;
    0xa3 => ShlLong, "shl-long", Format23x;
    0xa4 => ShrLong, "shr-long", Format23x;
    0xa5 => UshrLong, "ushr-long", Format23x;
    0xa6 => AddFloat, "add-float", Format23x;
    0xa7 => SubFloat, "sub-float", Format23x;
    0xa8 => MulFloat, "mul-float", Format23x;
    0xa9 => DivFloat, "div-float", Format23x;
    0xaa => RemFloat, "rem-float", Format23x;
    0xab => AddDouble, "add-double", Format23x;
    0xac => SubDouble, "sub-double", Format23x;
    0xad => MulDouble, "mul-double", Format23x;
    0xae => DivDouble, "div-double", Format23x;
    0xaf => RemDouble, "rem-double", Format23x;
    0xb0 => AddInt2addr, "add-int/2addr", Format12x;
    0xb1 => SubInt2addr, "sub-int/2addr", Format12x;
    0xb2 => MulInt2addr, "mul-int/2addr", Format12x;
    0xb3 => DivInt2addr, "div-int/2addr", Format12x;
    0xb4 => RemInt2addr, "rem-int/2addr", Format12x;
    0xb5 => AndInt2addr, "and-int/2addr", Format12x;
    0xb6 => OrInt2addr, "or-int/2addr", Format12x;
    0xb7 => XorInt2addr, "xor-int/2addr", Format12x;
    0xb8 => ShlInt2addr, "shl-int/2addr", Format12x;
    0xb9 => ShrInt2addr, "shr-int/2addr", Format12x;
    0xba => UshrInt2addr, "ushr-int/2addr", Format12x;
    0xbb => AddLong2addr, "add-long/2addr", Format12x;
    0xbc => SubLong2addr, "sub-long/2addr", Format12x;
    0xbd => MulLong2addr, "mul-long/2addr", Format12x;
    0xbe => DivLong2addr, "div-long/2addr", Format12x;
    0xbf => RemLong2addr, "rem-long/2addr", Format12x;
    0xc0 => AndLong2addr, "and-long/2addr", Format12x;
    0xc1 => OrLong2addr, "or-long/2addr", Format12x;
    0xc2 => XorLong2addr, "xor-long/2addr", Format12x;
    0xc3 => ShlLong2addr, "shl-long/2addr", Format12x;
    0xc4 => ShrLong2addr, "shr-long/2addr", Format12x;
    0xc5 => UshrLong2addr, "ushr-long/2addr", Format12x;
    0xc6 => AddFloat2addr, "add-float/2addr", Format12x;
    0xc7 => SubFloat2addr, "sub-float/2addr", Format12x;
    0xc8 => MulFloat2addr, "mul-float/2addr", Format12x;
    0xc9 => DivFloat2addr, "div-float/2addr", Format12x;
    0xca => RemFloat2addr, "rem-float/2addr", Format12x;
    0xcb => AddDouble2addr, "add-double/2addr", Format12x;
    0xcc => SubDouble2addr, "sub-double/2addr", Format12x;
    0xcd => MulDouble2addr, "mul-double/2addr", Format12x;
    0xce => DivDouble2addr, "div-double/2addr", Format12x;
    0xcf => RemDouble2addr, "rem-double/2addr", Format12x;
    0xd0 => AddIntLit16, "add-int/lit16", Format22s;
    0xd1 => RsubInt, "rsub-int", Format22s;
    0xd2 => MulIntLit16, "mul-int/lit16", Format22s;
    0xd3 => DivIntLit16, "div-int/lit16", Format22s;
    0xd4 => RemIntLit16, "rem-int/lit16", Format22s;
    0xd5 => AndIntLit16, "and-int/lit16", Format22s;
    0xd6 => OrIntLit16, "or-int/lit16", Format22s;
    0xd7 => XorIntLit16, "xor-int/lit16", Format22s;
    0xd8 => AddIntLit8, "add-int/lit8", Format22b;
    0xd9 => RsubIntLit8, "rsub-int/lit8", Format22b;
    0xda => MulIntLit8, "mul-int/lit8", Format22b;
    0xdb => DivIntLit8, "div-int/lit8", Format22b;
    0xdc => RemIntLit8, "rem-int/lit8", Format22b;
    0xdd => AndIntLit8, "and-int/lit8", Format22b;
    0xde => OrIntLit8, "or-int/lit8", Format22b;
    0xdf => XorIntLit8, "xor-int/lit8", Format22b;
    0xe0 => ShlIntLit8, "shl-int/lit8", Format22b;
    0xe1 => ShrIntLit8, "shr-int/lit8", Format22b;
    0xe2 => UshrIntLit8, "ushr-int/lit8", Format22b;
}

impl Opcode {
    /// Raw byte value.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Control-flow flags, derived from the opcode map layout.
    pub fn flags(self) -> OpcodeFlags {
        match self.value() {
            0x0e..=0x11 => OpcodeFlags::RETURN,
            0x27 => OpcodeFlags::THROW,
            // goto, goto/16, goto/32
            0x28..=0x2a => OpcodeFlags::JUMP,
            // packed-switch and sparse-switch fall through on no match
            0x2b | 0x2c => OpcodeFlags::JUMP | OpcodeFlags::CONDITIONAL,
            // if-test and if-testz
            0x32..=0x3d => OpcodeFlags::JUMP | OpcodeFlags::CONDITIONAL,
            _ => OpcodeFlags::empty(),
        }
    }

    /// Whether execution cannot continue at the next instruction
    /// unconditionally (the instruction after this one starts a new basic
    /// block).
    pub fn ends_basic_block(self) -> bool {
        self.flags()
            .intersects(OpcodeFlags::JUMP | OpcodeFlags::RETURN | OpcodeFlags::THROW)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
