mod finance;
